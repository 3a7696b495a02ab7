// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cumulative cost tables
//!
//! Every cell of a cost table holds the least total energy of any
//! path that reaches it from the starting edge, moving one row (or
//! column) per step and drifting at most one pixel sideways.  Each row
//! depends only on the row before it, so a single sweep is enough.
//!
//! Unlike the energy calculation, nothing wraps here: a pixel on the
//! left edge has two possible parents, not three.

use crate::grid::Grid;
use std::cmp;
use std::ops::RangeInclusive;

// The in-range neighbours of `i` (itself included) along an axis of
// length `len`.
#[inline]
pub(crate) fn span(i: u32, len: u32) -> RangeInclusive<u32> {
    i.saturating_sub(1)..=cmp::min(i + 1, len - 1)
}

/// The top-to-bottom cost table, used to find vertical seams.
pub fn vertical_costs(energy: &Grid<u64>) -> Grid<u64> {
    let (width, height) = energy.dimensions();
    let mut costs = Grid::new(width, height);

    // The first row costs exactly its own energy.
    for x in 0..width {
        costs[(x, 0)] = energy[(x, 0)];
    }

    for y in 1..height {
        for x in 0..width {
            let parent = span(x, width)
                .map(|px| costs[(px, y - 1)])
                .fold(u64::MAX, cmp::min);
            costs[(x, y)] = energy[(x, y)] + parent;
        }
    }
    costs
}

/// The left-to-right cost table, used to find horizontal seams.
pub fn horizontal_costs(energy: &Grid<u64>) -> Grid<u64> {
    let (width, height) = energy.dimensions();
    let mut costs = Grid::new(width, height);

    // The first column costs exactly its own energy.
    for y in 0..height {
        costs[(0, y)] = energy[(0, y)];
    }

    for x in 1..width {
        for y in 0..height {
            let parent = span(y, height)
                .map(|py| costs[(x - 1, py)])
                .fold(u64::MAX, cmp::min);
            costs[(x, y)] = energy[(x, y)] + parent;
        }
    }
    costs
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_DATA: [u64; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn energies() -> Grid<u64> {
        Grid::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn span_clamps_at_both_edges() {
        assert_eq!(span(0, 5), 0..=1);
        assert_eq!(span(2, 5), 1..=3);
        assert_eq!(span(4, 5), 3..=4);
        assert_eq!(span(0, 1), 0..=0);
    }

    #[test]
    fn vertical_costs_accumulate_downward() {
        let costs = vertical_costs(&energies());
        let expected: [u64; 20] = [
            9, 9, 0, 9, 9, 18, 1, 9, 8, 18, 10, 10, 10, 17, 8, 19, 19, 19, 8, 17,
        ];
        assert_eq!(costs.as_slice(), &expected[..]);
    }

    #[test]
    fn horizontal_costs_accumulate_rightward() {
        let costs = horizontal_costs(&energies());
        // Read column by column, the table is:
        //   [9, 9, 9, 9], [18, 10, 18, 18], [10, 19, 19, 27],
        //   [19, 18, 28, 19], [27, 27, 18, 28]
        let expected: [u64; 20] = [
            9, 18, 10, 19, 27, 9, 10, 19, 18, 27, 9, 18, 19, 28, 18, 9, 18, 27, 19, 28,
        ];
        assert_eq!(costs.as_slice(), &expected[..]);
    }

    #[test]
    fn checkerboard_costs_by_hand() {
        // Energy of a 3x3 checkerboard whose squares differ by 10 in
        // the red channel.
        let energy = Grid::from_vec(3, 3, vec![200, 100, 200, 100, 0, 100, 200, 100, 200]).unwrap();
        let costs = vertical_costs(&energy);
        assert_eq!(
            costs.as_slice(),
            &[200, 100, 200, 200, 100, 200, 300, 200, 300]
        );
        // The board is symmetric, so sweeping sideways gives the
        // transpose.
        assert_eq!(
            horizontal_costs(&energy).as_slice(),
            &[200, 200, 300, 100, 100, 200, 200, 200, 300]
        );
    }

    #[test]
    fn single_column_only_goes_straight_down() {
        let energy = Grid::from_vec(1, 3, vec![4, 5, 6]).unwrap();
        assert_eq!(vertical_costs(&energy).as_slice(), &[4, 9, 15]);
        assert_eq!(horizontal_costs(&energy).as_slice(), &[4, 5, 6]);
    }
}
