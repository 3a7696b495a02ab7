// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing
//!
//! Seam carving shrinks an image one row or column at a time by
//! removing the connected path of pixels with the least total energy,
//! so flat, uninteresting regions go first and edges survive.

pub mod carver;
pub mod costs;
pub mod energy;
pub mod error;
pub mod grid;
pub mod seam;

pub use carver::SeamCarver;
pub use costs::{horizontal_costs, vertical_costs};
pub use energy::{calculate_energy, energy_to_image, pixel_energy};
pub use error::SeamError;
pub use grid::Grid;
pub use seam::{
    extract_horizontal_seam, extract_vertical_seam, seam_energy, validate_seam, Orientation,
};
