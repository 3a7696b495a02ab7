// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam extraction
//!
//! A seam is read off a finished cost table by starting at the
//! cheapest cell on the far edge and walking back toward the start,
//! at each step taking the first neighbour whose cost, plus the
//! energy of the current pixel, accounts for the current cost.
//! Neighbours are always tried in the same order: the lower index,
//! then straight, then the higher index.  On a plateau of equal costs
//! that order decides which seam comes out, and it must not change.

use crate::error::SeamError;
use crate::grid::Grid;
use itertools::Itertools;
use std::fmt;
use std::iter;

/// Which way a seam runs.  A vertical seam has one column index per
/// row and narrows the image; a horizontal seam has one row index per
/// column and shortens it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The other way.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

// Lower, straight, higher; whichever of those exist.
fn candidates(i: u32, len: u32) -> impl Iterator<Item = u32> {
    i.checked_sub(1)
        .into_iter()
        .chain(iter::once(i))
        .chain(Some(i + 1).filter(move |n| *n < len))
}

// The first (lowest-index) minimum of a non-empty sequence.
fn first_min(values: impl Iterator<Item = u64>) -> u32 {
    values
        .enumerate()
        .fold((0, u64::MAX), |best, (i, v)| {
            if v < best.1 {
                (i, v)
            } else {
                best
            }
        })
        .0 as u32
}

/// Given the top-to-bottom cost table and the energy it was built
/// from, return one x-coordinate per row: the cheapest vertical seam.
/// An empty table has no seam.
pub fn extract_vertical_seam(costs: &Grid<u64>, energy: &Grid<u64>) -> Vec<u32> {
    let (width, height) = costs.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut seam = vec![0; height as usize];

    let mut x = first_min(costs.row(height - 1).iter().copied());
    seam[height as usize - 1] = x;

    for y in (1..height).rev() {
        let here = costs[(x, y)];
        let step = energy[(x, y)];
        x = candidates(x, width)
            .find(|px| costs[(*px, y - 1)] + step == here)
            .expect("cost table has no parent for a seam pixel");
        seam[y as usize - 1] = x;
    }
    seam
}

/// Given the left-to-right cost table and its energy, return one
/// y-coordinate per column: the cheapest horizontal seam.
pub fn extract_horizontal_seam(costs: &Grid<u64>, energy: &Grid<u64>) -> Vec<u32> {
    let (width, height) = costs.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut seam = vec![0; width as usize];

    let mut y = first_min((0..height).map(|y| costs[(width - 1, y)]));
    seam[width as usize - 1] = y;

    for x in (1..width).rev() {
        let here = costs[(x, y)];
        let step = energy[(x, y)];
        y = candidates(y, height)
            .find(|py| costs[(x - 1, *py)] + step == here)
            .expect("cost table has no parent for a seam pixel");
        seam[x as usize - 1] = y;
    }
    seam
}

/// The total energy of the pixels a seam passes through.
pub fn seam_energy(energy: &Grid<u64>, seam: &[u32], orientation: Orientation) -> u64 {
    seam.iter()
        .enumerate()
        .map(|(i, s)| match orientation {
            Orientation::Vertical => energy[(*s, i as u32)],
            Orientation::Horizontal => energy[(i as u32, *s)],
        })
        .sum()
}

/// Check a seam before anyone acts on it: present, one entry per
/// row or column (`expected_len`), every entry below `bound`, and no
/// jumps of more than one pixel between neighbours.
pub fn validate_seam(seam: &[u32], expected_len: u32, bound: u32) -> Result<(), SeamError> {
    if seam.is_empty() {
        return Err(SeamError::MissingSeam);
    }
    if seam.len() != expected_len as usize {
        return Err(SeamError::SeamLength {
            expected: expected_len as usize,
            actual: seam.len(),
        });
    }
    if let Some((position, index)) = seam.iter().enumerate().find(|(_, s)| **s >= bound) {
        return Err(SeamError::SeamIndexOutOfRange {
            position,
            index: *index,
            bound,
        });
    }
    if let Some((position, _)) = seam
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|(_, (a, b))| (**a as i64 - **b as i64).abs() > 1)
    {
        return Err(SeamError::DisconnectedSeam { position });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::{horizontal_costs, vertical_costs};

    const ENERGY_DATA: [u64; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn energies() -> Grid<u64> {
        Grid::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energy = energies();
        let seam = extract_vertical_seam(&vertical_costs(&energy), &energy);
        assert_eq!(seam, [2, 3, 4, 3]);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let energy = energies();
        let seam = extract_horizontal_seam(&horizontal_costs(&energy), &energy);
        assert_eq!(seam, [0, 1, 0, 1, 2]);
    }

    #[test]
    fn seam_energy_matches_terminal_cost() {
        let energy = energies();
        let costs = vertical_costs(&energy);
        let seam = extract_vertical_seam(&costs, &energy);
        assert_eq!(seam_energy(&energy, &seam, Orientation::Vertical), 8);
        assert_eq!(costs[(3, 3)], 8);

        let costs = horizontal_costs(&energy);
        let seam = extract_horizontal_seam(&costs, &energy);
        assert_eq!(
            seam_energy(&energy, &seam, Orientation::Horizontal),
            costs[(4, 2)]
        );
    }

    #[test]
    fn ties_prefer_the_lower_index() {
        // Both (0, 0) and (1, 0) can feed (1, 1) at zero cost; the left
        // one wins.  The terminal scan also takes the first minimum.
        let energy = Grid::from_vec(3, 2, vec![0, 0, 0, 5, 0, 0]).unwrap();
        let seam = extract_vertical_seam(&vertical_costs(&energy), &energy);
        assert_eq!(seam, [0, 1]);

        let energy = Grid::from_vec(2, 3, vec![0, 5, 0, 0, 0, 0]).unwrap();
        let seam = extract_horizontal_seam(&horizontal_costs(&energy), &energy);
        assert_eq!(seam, [0, 1]);
    }

    #[test]
    fn flat_energy_runs_down_the_first_column() {
        let energy: Grid<u64> = Grid::new(4, 3);
        assert_eq!(
            extract_vertical_seam(&vertical_costs(&energy), &energy),
            [0, 0, 0]
        );
        assert_eq!(
            extract_horizontal_seam(&horizontal_costs(&energy), &energy),
            [0, 0, 0, 0]
        );
    }

    #[test]
    fn degenerate_grids_yield_trivial_seams() {
        let energy = Grid::from_vec(1, 3, vec![7, 1, 7]).unwrap();
        assert_eq!(
            extract_vertical_seam(&vertical_costs(&energy), &energy),
            [0, 0, 0]
        );
        assert_eq!(
            extract_horizontal_seam(&horizontal_costs(&energy), &energy),
            [1]
        );
    }

    #[test]
    fn empty_grids_have_no_seam() {
        for &(width, height) in &[(0, 3), (3, 0), (0, 0)] {
            let energy: Grid<u64> = Grid::new(width, height);
            assert!(extract_vertical_seam(&vertical_costs(&energy), &energy).is_empty());
            assert!(extract_horizontal_seam(&horizontal_costs(&energy), &energy).is_empty());
        }
    }

    #[test]
    fn candidates_stay_in_range() {
        assert_eq!(candidates(0, 3).collect::<Vec<_>>(), [0, 1]);
        assert_eq!(candidates(1, 3).collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(candidates(2, 3).collect::<Vec<_>>(), [1, 2]);
        assert_eq!(candidates(0, 1).collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn validation_catches_every_kind_of_bad_seam() {
        assert_eq!(validate_seam(&[], 3, 4), Err(SeamError::MissingSeam));
        assert_eq!(
            validate_seam(&[0, 1], 3, 4),
            Err(SeamError::SeamLength {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            validate_seam(&[0, 1, 4], 3, 4),
            Err(SeamError::SeamIndexOutOfRange {
                position: 2,
                index: 4,
                bound: 4
            })
        );
        assert_eq!(
            validate_seam(&[0, 2, 2], 3, 4),
            Err(SeamError::DisconnectedSeam { position: 0 })
        );
        assert_eq!(validate_seam(&[1, 2, 1], 3, 4), Ok(()));
    }

    #[test]
    fn turning_twice_is_a_no_op() {
        assert_eq!(Orientation::Vertical.turn(), Orientation::Horizontal);
        assert_eq!(Orientation::Vertical.turn().turn(), Orientation::Vertical);
    }
}
