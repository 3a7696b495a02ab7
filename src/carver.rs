// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - the engine
//!
//! A `SeamCarver` owns a copy of the image, its energy map, and both
//! cost tables.  The tables are built as soon as the carver is, and
//! every seam removal throws all three away and builds them again
//! from the narrower (or shorter) image.  Taking a seam out changes
//! the neighbours of every pixel along its path, so patching the old
//! tables is not attempted.

use crate::costs::{horizontal_costs, vertical_costs};
use crate::energy::{calculate_energy, energy_to_image};
use crate::error::SeamError;
use crate::grid::Grid;
use crate::seam::{extract_horizontal_seam, extract_vertical_seam, validate_seam, Orientation};
use image::{GenericImageView, GrayImage, ImageBuffer, Pixel, Primitive};
use log::{debug, trace};

/// The image being carved, plus everything derived from it.
pub struct SeamCarver<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: ImageBuffer<P, Vec<S>>,
    energy: Grid<u64>,
    vertical: Grid<u64>,
    horizontal: Grid<u64>,
}

// Energy, then the two cost tables, in the order they depend on one
// another.
fn build_tables<P, S>(image: &ImageBuffer<P, Vec<S>>) -> (Grid<u64>, Grid<u64>, Grid<u64>)
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let energy = calculate_energy(image);
    let vertical = vertical_costs(&energy);
    let horizontal = horizontal_costs(&energy);
    debug!(
        "built energy and cost tables for a {}x{} image",
        image.width(),
        image.height()
    );
    (energy, vertical, horizontal)
}

impl<P, S> SeamCarver<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Copy an image into a new carver and build its tables.  The
    /// caller's image is never touched.
    pub fn new<I>(image: &I) -> Result<Self, SeamError>
    where
        I: GenericImageView<Pixel = P>,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage { width, height });
        }
        let image = ImageBuffer::from_fn(width, height, |x, y| image.get_pixel(x, y));
        let (energy, vertical, horizontal) = build_tables(&image);
        Ok(SeamCarver {
            image,
            energy,
            vertical,
            horizontal,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The image as it stands after the most recent removal.
    pub fn picture(&self) -> &ImageBuffer<P, Vec<S>> {
        &self.image
    }

    pub fn into_picture(self) -> ImageBuffer<P, Vec<S>> {
        self.image
    }

    /// The energy of the pixel at `(col, row)`.
    pub fn energy(&self, col: u32, row: u32) -> Result<u64, SeamError> {
        self.energy.get(col, row).ok_or(SeamError::OutOfRange {
            col,
            row,
            width: self.width(),
            height: self.height(),
        })
    }

    pub fn energy_map(&self) -> &Grid<u64> {
        &self.energy
    }

    /// The top-to-bottom cost table.
    pub fn vertical_costs(&self) -> &Grid<u64> {
        &self.vertical
    }

    /// The left-to-right cost table.
    pub fn horizontal_costs(&self) -> &Grid<u64> {
        &self.horizontal
    }

    /// The current energy map as a grayscale picture.
    pub fn energy_picture(&self) -> GrayImage {
        energy_to_image(&self.energy)
    }

    /// One column index per row: the cheapest top-to-bottom seam.
    pub fn find_vertical_seam(&self) -> Vec<u32> {
        let seam = extract_vertical_seam(&self.vertical, &self.energy);
        trace!("vertical seam {:?}", seam);
        seam
    }

    /// One row index per column: the cheapest left-to-right seam.
    pub fn find_horizontal_seam(&self) -> Vec<u32> {
        let seam = extract_horizontal_seam(&self.horizontal, &self.energy);
        trace!("horizontal seam {:?}", seam);
        seam
    }

    pub fn find_seam(&self, orientation: Orientation) -> Vec<u32> {
        match orientation {
            Orientation::Vertical => self.find_vertical_seam(),
            Orientation::Horizontal => self.find_horizontal_seam(),
        }
    }

    // Swap in a freshly carved image and everything derived from it
    // in one go.
    fn replace(&mut self, image: ImageBuffer<P, Vec<S>>) {
        let (energy, vertical, horizontal) = build_tables(&image);
        *self = SeamCarver {
            image,
            energy,
            vertical,
            horizontal,
        };
    }

    /// Take a vertical seam out of the image, making it one column
    /// narrower.  The seam needs one in-range, connected column index
    /// per row; anything else is refused and nothing changes.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), SeamError> {
        let (width, height) = self.image.dimensions();
        validate_seam(seam, height, width)?;
        if width <= 1 {
            return Err(SeamError::ImageTooSmall {
                orientation: Orientation::Vertical,
            });
        }

        let mut carved: ImageBuffer<P, Vec<S>> = ImageBuffer::new(width - 1, height);
        for (y, skip) in seam.iter().enumerate() {
            let y = y as u32;
            for (cursor, x) in (0..width).filter(|x| x != skip).enumerate() {
                carved.put_pixel(cursor as u32, y, *self.image.get_pixel(x, y));
            }
        }
        self.replace(carved);
        debug!("removed vertical seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Take a horizontal seam out of the image, making it one row
    /// shorter.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), SeamError> {
        let (width, height) = self.image.dimensions();
        validate_seam(seam, width, height)?;
        if height <= 1 {
            return Err(SeamError::ImageTooSmall {
                orientation: Orientation::Horizontal,
            });
        }

        let mut carved: ImageBuffer<P, Vec<S>> = ImageBuffer::new(width, height - 1);
        for (x, skip) in seam.iter().enumerate() {
            let x = x as u32;
            for (cursor, y) in (0..height).filter(|y| y != skip).enumerate() {
                carved.put_pixel(x, cursor as u32, *self.image.get_pixel(x, y));
            }
        }
        self.replace(carved);
        debug!("removed horizontal seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    pub fn remove_seam(&mut self, seam: &[u32], orientation: Orientation) -> Result<(), SeamError> {
        match orientation {
            Orientation::Vertical => self.remove_vertical_seam(seam),
            Orientation::Horizontal => self.remove_horizontal_seam(seam),
        }
    }

    fn carve_once(&mut self, orientation: Orientation) -> Result<(), SeamError> {
        let seam = self.find_seam(orientation);
        self.remove_seam(&seam, orientation)
    }

    /// Find and remove `count` seams running one way, one at a time.
    /// Refuses up front, without carving anything, if that would use
    /// up every column (or row).
    pub fn remove_seams(&mut self, orientation: Orientation, count: u32) -> Result<(), SeamError> {
        let available = match orientation {
            Orientation::Vertical => self.width(),
            Orientation::Horizontal => self.height(),
        };
        if count >= available {
            return Err(SeamError::ImageTooSmall { orientation });
        }
        for _ in 0..count {
            self.carve_once(orientation)?;
        }
        Ok(())
    }

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the image, alternating direction while both dimensions
    /// still need to shrink.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<(), SeamError> {
        let (width, height) = self.image.dimensions();
        if width < new_width || height < new_height {
            return Err(SeamError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        if new_width == 0 {
            return Err(SeamError::ImageTooSmall {
                orientation: Orientation::Vertical,
            });
        }
        if new_height == 0 {
            return Err(SeamError::ImageTooSmall {
                orientation: Orientation::Horizontal,
            });
        }

        let mut direction = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Vertical)?;
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Horizontal)?;
        }
        Ok(())
    }
}
