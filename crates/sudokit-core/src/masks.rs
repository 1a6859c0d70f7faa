//! Row, column, and quadrant constraint masks.
//!
//! [`UnitMasks`] is the propagation state of the search engine: one
//! [`DigitSet`] per row, column, and quadrant recording which digits the unit
//! already contains. The masks are derived from a [`Grid`] at the start of a
//! masked operation and then kept consistent incrementally with
//! [`place`](UnitMasks::place) / [`unplace`](UnitMasks::unplace) as the
//! search places and retracts digits.
//!
//! Building the masks is also the single point where a malformed grid is
//! detected: an out-of-range digit or a digit repeated within a unit yields
//! [`GridInconsistency`].

use crate::{
    DigitSet, Grid,
    index::{CELL_COUNT, column_of_cell, quadrant_of_cell, row_of_cell},
};

/// Why a grid cannot be used as a search starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridInconsistency {
    /// A cell holds a value outside 0-9.
    #[display("cell {cell} holds {value}, outside the digit range 1-9")]
    DigitOutOfRange {
        /// Flat index of the offending cell.
        cell: usize,
        /// The out-of-range value.
        value: u8,
    },
    /// A digit occurs twice in a row, column, or quadrant.
    #[display("digit {value} at cell {cell} repeats within a row, column, or quadrant")]
    DuplicateDigit {
        /// Flat index of the second occurrence.
        cell: usize,
        /// The repeated digit.
        value: u8,
    },
}

/// Constraint masks for all 27 units.
///
/// Invariant: between [`place`](Self::place)/[`unplace`](Self::unplace)
/// calls, each unit's mask equals the union of the digits placed in that
/// unit's cells on the grid the masks were built from.
///
/// # Examples
///
/// ```
/// use sudokit_core::{Grid, UnitMasks};
///
/// let mut grid = Grid::new();
/// grid.set_value(0, 3);
///
/// let mut masks = UnitMasks::from_grid(&grid).unwrap();
/// assert!(!masks.candidates(8).contains(3)); // same row
///
/// // Retract the digit and the candidate returns.
/// masks.unplace(0, 3);
/// assert!(masks.candidates(8).contains(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitMasks {
    rows: [DigitSet; 9],
    columns: [DigitSet; 9],
    quadrants: [DigitSet; 9],
}

impl UnitMasks {
    /// Builds the masks by scanning every cell of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridInconsistency`] if a cell holds a value greater than 9
    /// or a digit already present in its row, column, or quadrant. This is
    /// the sole detector of malformed starting grids.
    pub fn from_grid(grid: &Grid) -> Result<Self, GridInconsistency> {
        let mut masks = Self {
            rows: [DigitSet::EMPTY; 9],
            columns: [DigitSet::EMPTY; 9],
            quadrants: [DigitSet::EMPTY; 9],
        };

        for cell in 0..CELL_COUNT {
            let value = grid.value(cell);
            if value == 0 {
                continue;
            }
            if value > 9 {
                return Err(GridInconsistency::DigitOutOfRange { cell, value });
            }
            if masks.used_at(cell).contains(value) {
                return Err(GridInconsistency::DuplicateDigit { cell, value });
            }
            masks.place(cell, value);
        }

        Ok(masks)
    }

    /// Records a digit placed at `cell` in all three of its units.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is 81 or greater, or if `digit` is outside 1-9.
    pub fn place(&mut self, cell: usize, digit: u8) {
        self.rows[row_of_cell(cell)].insert(digit);
        self.columns[column_of_cell(cell)].insert(digit);
        self.quadrants[quadrant_of_cell(cell)].insert(digit);
    }

    /// Retracts a digit previously placed at `cell` from all three units.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is 81 or greater, or if `digit` is outside 1-9.
    pub fn unplace(&mut self, cell: usize, digit: u8) {
        self.rows[row_of_cell(cell)].remove(digit);
        self.columns[column_of_cell(cell)].remove(digit);
        self.quadrants[quadrant_of_cell(cell)].remove(digit);
    }

    /// Returns the digits not excluded at `cell` by any of its three units.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is 81 or greater.
    #[must_use]
    pub fn candidates(&self, cell: usize) -> DigitSet {
        !self.used_at(cell)
    }

    fn used_at(&self, cell: usize) -> DigitSet {
        self.rows[row_of_cell(cell)]
            | self.columns[column_of_cell(cell)]
            | self.quadrants[quadrant_of_cell(cell)]
    }
}
