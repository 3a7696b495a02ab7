// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the squared central difference of its
//! neighbours' colors, taken across and down and summed:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = |Δx|²+|Δy|²
//! ```
//!
//! The image is treated as a torus: the left neighbour of column 0 is
//! the last column, the neighbour below the last row is row 0.  No
//! normalization is done, so the scale of the result follows the
//! scale of the color channels.

use crate::error::SeamError;
use crate::grid::Grid;
use image::{GenericImageView, GrayImage, Luma, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

#[inline]
fn wrap_before(i: u32, len: u32) -> u32 {
    if i == 0 {
        len - 1
    } else {
        i - 1
    }
}

#[inline]
fn wrap_after(i: u32, len: u32) -> u32 {
    if i + 1 >= len {
        0
    } else {
        i + 1
    }
}

#[inline]
fn channel<S: Primitive>(c: S) -> i64 {
    <i64 as NumCast>::from(c).unwrap_or_default()
}

// (Pixel, Pixel) -> Energy, over the red, green and blue channels.
#[inline]
fn energy_of_pair<P, S>(p1: &P, p2: &P) -> u64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    c1.channels()
        .iter()
        .zip(c2.channels())
        .map(|(a, b)| {
            let d = channel(*a) - channel(*b);
            (d * d) as u64
        })
        .sum()
}

// Callers guarantee (x, y) is inside the image.
fn energy_at<I, P, S>(image: &I, x: u32, y: u32) -> u64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let (left, right, up, down) = (
        image.get_pixel(wrap_before(x, width), y),
        image.get_pixel(wrap_after(x, width), y),
        image.get_pixel(x, wrap_before(y, height)),
        image.get_pixel(x, wrap_after(y, height)),
    );
    energy_of_pair(&right, &left) + energy_of_pair(&down, &up)
}

/// The energy of a single pixel.  Fails if `(x, y)` is not inside the
/// image.
pub fn pixel_energy<I, P, S>(image: &I, x: u32, y: u32) -> Result<u64, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        return Err(SeamError::OutOfRange {
            col: x,
            row: y,
            width,
            height,
        });
    }
    Ok(energy_at(image, x, y))
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.
pub fn calculate_energy<I, P, S>(image: &I) -> Grid<u64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut emap = Grid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy_at(image, x, y);
    }
    emap
}

/// Render an energy map as a grayscale image, scaled so the most
/// energetic pixel is white.  A map with no energy at all is black.
pub fn energy_to_image(energy: &Grid<u64>) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.as_slice().iter().copied().max().unwrap_or(0);
    if factor == 0 {
        return GrayImage::new(width, height);
    }
    GrayImage::from_fn(width, height, |x, y| {
        Luma([(energy[(x, y)] * 255 / factor) as u8])
    })
}
