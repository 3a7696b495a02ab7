// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything a caller can get wrong when asking for energies or
//! handing back a seam.  None of these leave the carver changed.

use crate::seam::Orientation;
use failure::Fail;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum SeamError {
    #[fail(display = "cannot carve an empty {}x{} image", width, height)]
    EmptyImage { width: u32, height: u32 },

    #[fail(
        display = "coordinates ({}, {}) lie outside the {}x{} image",
        col, row, width, height
    )]
    OutOfRange {
        col: u32,
        row: u32,
        width: u32,
        height: u32,
    },

    #[fail(display = "no seam given")]
    MissingSeam,

    #[fail(display = "seam has {} entries, expected {}", actual, expected)]
    SeamLength { expected: usize, actual: usize },

    #[fail(
        display = "seam entry {} is {}, which is not below {}",
        position, index, bound
    )]
    SeamIndexOutOfRange {
        position: usize,
        index: u32,
        bound: u32,
    },

    #[fail(display = "seam breaks after entry {}", position)]
    DisconnectedSeam { position: usize },

    #[fail(display = "image is too small to lose another {} seam", orientation)]
    ImageTooSmall { orientation: Orientation },

    #[fail(
        display = "seam carving cannot grow {}x{} to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },

    #[fail(display = "grid needs {} values, got {}", expected, actual)]
    GridSize { expected: usize, actual: usize },
}
