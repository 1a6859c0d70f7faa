//! The board engine: generation, counting, and uniqueness-preserving removal.

use std::fmt::{self, Display};

use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg32;
use sudokit_core::{Grid, UnitMasks, index::CELL_COUNT};

use crate::search;

/// Clue count targeted by puzzle generation when the caller has no opinion.
pub const DEFAULT_CLUE_COUNT: usize = 30;

/// Solution-count cap that distinguishes "exactly one" from "more than one".
///
/// Uniqueness checks never need the exact number of solutions, only whether a
/// second one exists, so the bounded counter is always called with this limit
/// during clue removal.
pub const UNIQUENESS_LIMIT: usize = 2;

/// A 9×9 board paired with its private random source.
///
/// The random source is used only for variety: shuffling candidate digits
/// during solution generation and cell order during clue removal, never for
/// correctness. Given the same seed, generation is fully deterministic.
///
/// A `Board` owns its grid and random source exclusively; callers that want
/// parallel generation run one `Board` per worker.
///
/// # Examples
///
/// ```
/// use sudokit_generator::Board;
///
/// let mut board = Board::with_seed(1234);
/// assert!(board.generate_solution());
/// assert_eq!(board.grid().filled_count(), 81);
/// assert_eq!(board.count_solutions(2), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    rng: Pcg32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board seeded from the thread-local entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Creates an empty board with a deterministic seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            rng: Pcg32::seed_from_u64(u64::from(seed)),
        }
    }

    /// Re-seeds the random source.
    ///
    /// Two boards seeded identically produce identical generation sequences
    /// from that point on.
    pub fn set_seed(&mut self, seed: u32) {
        self.rng = Pcg32::seed_from_u64(u64::from(seed));
    }

    /// Returns the current grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns mutable access to the current grid.
    ///
    /// Engine operations re-derive their masks from the grid, so callers may
    /// freely edit cells between calls, including writing values the engine
    /// will reject as inconsistent.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Resets the grid and fills it with a random complete solution.
    ///
    /// Returns `false` only if no solution exists from the starting state;
    /// from the cleared grid this always succeeds.
    pub fn generate_solution(&mut self) -> bool {
        self.grid.clear();
        let Ok(mut masks) = UnitMasks::from_grid(&self.grid) else {
            return false;
        };
        search::solve_from(&mut self.grid, &mut masks, &mut self.rng, true)
    }

    /// Completes the current grid in place, without randomization.
    ///
    /// Candidates are tried in ascending order, so the result is
    /// deterministic for a given starting grid. Returns `false` if the grid
    /// is inconsistent or admits no completion; the grid is left unchanged in
    /// that case.
    pub fn solve(&mut self) -> bool {
        let Ok(mut masks) = UnitMasks::from_grid(&self.grid) else {
            return false;
        };
        search::solve_from(&mut self.grid, &mut masks, &mut self.rng, false)
    }

    /// Counts the solutions of the current grid, up to `limit`.
    ///
    /// The count is exact below the limit and saturates at it; a `limit` of 0
    /// returns 0 without doing any work. An inconsistent grid (duplicate or
    /// out-of-range digit) counts as 0. The board is never mutated by this
    /// query; the search runs on a private copy of the grid.
    #[must_use]
    pub fn count_solutions(&self, limit: usize) -> usize {
        if limit == 0 {
            return 0;
        }
        let mut scratch = self.grid;
        let Ok(mut masks) = UnitMasks::from_grid(&scratch) else {
            return 0;
        };
        search::count_solutions_from(&mut scratch, &mut masks, limit)
    }

    /// Generates a puzzle with exactly `clues` given cells and one solution.
    ///
    /// Fills the board with a fresh random solution, then walks the cells in
    /// random order, clearing each cell whose removal keeps the solution
    /// unique, until only `clues` filled cells remain.
    ///
    /// Returns `false` when `clues` exceeds 81 or when the target cannot be
    /// reached because too few cells can be removed without losing
    /// uniqueness; the grid then holds the last attempted state and the
    /// caller decides whether to retry with fresh randomness.
    pub fn generate_puzzle(&mut self, clues: usize) -> bool {
        if clues > CELL_COUNT {
            return false;
        }
        if !self.generate_solution() {
            return false;
        }

        let mut order: [usize; CELL_COUNT] = std::array::from_fn(|cell| cell);
        order.shuffle(&mut self.rng);

        let mut remaining = CELL_COUNT;
        for &cell in &order {
            if remaining <= clues {
                break;
            }

            let previous = self.grid.value(cell);
            self.grid.set_value(cell, 0);

            if self.count_solutions(UNIQUENESS_LIMIT) == 1 {
                remaining -= 1;
            } else {
                self.grid.set_value(cell, previous);
            }
        }

        remaining == clues
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.grid, f)
    }
}
