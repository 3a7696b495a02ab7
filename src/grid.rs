// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A dense two-dimensional map
//!
//! The energy grid and both cost tables are the same shape as the
//! image they were derived from, so they all live in one flat,
//! row-major vector addressed by `(x, y)`, the same order the `image`
//! crate uses for its pixels.

use crate::error::SeamError;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of `Copy` values: energies,
/// cumulative costs, whatever the carver needs to keep per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// A new grid filled with the content type's default value.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  The vector must hold
    /// exactly `width * height` values.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Result<Self, SeamError> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(SeamError::GridSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            data,
        })
    }

    // Keep the index math in a singular location and never, ever mess
    // with it anywhere else.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bounds-checked read of a single cell.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.data[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// One full row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[P] {
        &self.data
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
