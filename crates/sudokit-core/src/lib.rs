//! Core data structures for the Sudokit board engine.
//!
//! This crate provides the fundamental, allocation-free building blocks used
//! by solution generation and puzzle derivation:
//!
//! - [`digit_set`]: [`DigitSet`], a 9-bit mask of the digits 1-9, used both
//!   for per-unit constraint tracking and for transient candidate sets
//! - [`index`]: pure index arithmetic mapping flat cell indices (0-80) to
//!   rows, columns, and quadrants
//! - [`grid`]: [`Grid`], the 81-cell board storage with unit accessors and
//!   the fixed text rendering, plus the [`digits_are_unique`] validator
//! - [`masks`]: [`UnitMasks`], the row/column/quadrant constraint masks
//!   derived from a grid and maintained incrementally during search
//!
//! # Examples
//!
//! ```
//! use sudokit_core::{Grid, UnitMasks};
//!
//! let mut grid = Grid::new();
//! grid.set_value(0, 5);
//!
//! let masks = UnitMasks::from_grid(&grid).unwrap();
//!
//! // 5 is no longer a candidate anywhere in row 0, column 0, or quadrant 0.
//! assert!(!masks.candidates(1).contains(5));
//! assert!(!masks.candidates(9).contains(5));
//! assert!(masks.candidates(80).contains(5));
//! ```

pub mod digit_set;
pub mod grid;
pub mod index;
pub mod masks;

pub use self::{
    digit_set::DigitSet,
    grid::{Grid, digits_are_unique},
    masks::{GridInconsistency, UnitMasks},
};
