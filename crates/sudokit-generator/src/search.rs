//! Recursive backtracking over a grid and its unit masks.
//!
//! Both entry points share the same shape: pick the most constrained empty
//! cell, try its candidates, and restore the grid and masks exactly on every
//! failure path so sibling branches never see residual state. [`solve_from`]
//! stops at the first completed grid; [`count_solutions_from`] keeps
//! exploring and accumulates completions up to a limit.

use rand::{Rng, seq::SliceRandom as _};
use sudokit_core::{DigitSet, Grid, UnitMasks, index::CELL_COUNT};
use tinyvec::ArrayVec;

/// Outcome of scanning the grid for the next cell to branch on.
pub(crate) enum Selection {
    /// No empty cell remains; the grid is a complete solution.
    Complete,
    /// Some empty cell has no candidate left, so this branch cannot succeed.
    DeadEnd,
    /// The most constrained empty cell and its candidate digits.
    Cell {
        /// Flat index of the chosen cell.
        cell: usize,
        /// Digits not excluded by the cell's row, column, or quadrant.
        candidates: DigitSet,
    },
}

/// Picks the empty cell with the fewest candidates.
///
/// Ties go to the first cell in scan order, and the scan stops early at a
/// single-candidate cell since nothing can beat it. A cell with zero
/// candidates aborts the scan immediately: the branch is already dead no
/// matter what the other cells look like.
pub(crate) fn select_cell(grid: &Grid, masks: &UnitMasks) -> Selection {
    let mut best: Option<(usize, DigitSet)> = None;

    for cell in 0..CELL_COUNT {
        if grid.value(cell) != 0 {
            continue;
        }
        let candidates = masks.candidates(cell);
        if candidates.is_empty() {
            return Selection::DeadEnd;
        }
        if best.is_none_or(|(_, current)| candidates.len() < current.len()) {
            let single = candidates.len() == 1;
            best = Some((cell, candidates));
            if single {
                break;
            }
        }
    }

    match best {
        Some((cell, candidates)) => Selection::Cell { cell, candidates },
        None => Selection::Complete,
    }
}

/// Fills every empty cell, backtracking on dead ends.
///
/// Returns `true` as soon as one completion is found, leaving the placements
/// in the grid. On failure the grid and masks are back in their pre-call
/// state. With `randomize` set, candidate order is shuffled at every branch;
/// otherwise candidates are tried in ascending order.
pub(crate) fn solve_from(
    grid: &mut Grid,
    masks: &mut UnitMasks,
    rng: &mut impl Rng,
    randomize: bool,
) -> bool {
    let (cell, candidates) = match select_cell(grid, masks) {
        Selection::Complete => return true,
        Selection::DeadEnd => return false,
        Selection::Cell { cell, candidates } => (cell, candidates),
    };

    let mut order: ArrayVec<[u8; 9]> = candidates.iter().collect();
    if randomize {
        order.shuffle(rng);
    }

    for &digit in order.iter() {
        grid.set_value(cell, digit);
        masks.place(cell, digit);

        if solve_from(grid, masks, rng, randomize) {
            return true;
        }

        masks.unplace(cell, digit);
        grid.set_value(cell, 0);
    }

    false
}

/// Counts completions of the grid, stopping once `limit` is reached.
///
/// Recurses into every candidate at the chosen cell rather than stopping at
/// the first success; each subtree is counted against the limit that remains
/// after the totals accumulated so far. The exact count beyond `limit` is
/// never computed. The grid and masks are restored before returning.
pub(crate) fn count_solutions_from(grid: &mut Grid, masks: &mut UnitMasks, limit: usize) -> usize {
    let (cell, candidates) = match select_cell(grid, masks) {
        Selection::Complete => return 1,
        Selection::DeadEnd => return 0,
        Selection::Cell { cell, candidates } => (cell, candidates),
    };

    let mut total = 0;
    for digit in candidates.iter() {
        grid.set_value(cell, digit);
        masks.place(cell, digit);

        total += count_solutions_from(grid, masks, limit - total);

        masks.unplace(cell, digit);
        grid.set_value(cell, 0);

        if total >= limit {
            break;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    fn masks_for(grid: &Grid) -> UnitMasks {
        UnitMasks::from_grid(grid).unwrap()
    }

    #[test]
    fn test_select_cell_on_empty_grid_reports_first_cell() {
        let grid = Grid::new();
        let masks = masks_for(&grid);

        match select_cell(&grid, &masks) {
            Selection::Cell { cell, candidates } => {
                assert_eq!(cell, 0);
                assert_eq!(candidates, DigitSet::FULL);
            }
            _ => panic!("expected a branch cell"),
        }
    }

    #[test]
    fn test_select_cell_prefers_most_constrained() {
        // Row 0 holds 1-8, so cell 8 has exactly one candidate left.
        let mut grid = Grid::new();
        for (cell, digit) in (0..8).zip(1..=8) {
            grid.set_value(cell, digit);
        }
        let masks = masks_for(&grid);

        match select_cell(&grid, &masks) {
            Selection::Cell { cell, candidates } => {
                assert_eq!(cell, 8);
                assert_eq!(candidates.iter().collect::<Vec<_>>(), vec![9]);
            }
            _ => panic!("expected a branch cell"),
        }
    }

    #[test]
    fn test_solve_restores_state_on_failure() {
        // 1-8 in row 0 and a 9 below cell 8 leave cell 8 with no candidate.
        let mut grid = Grid::new();
        for (cell, digit) in (0..8).zip(1..=8) {
            grid.set_value(cell, digit);
        }
        grid.set_value(17, 9);

        let snapshot = grid;
        let mut masks = masks_for(&grid);
        let masks_snapshot = masks;
        let mut rng = Pcg32::seed_from_u64(0);

        assert!(!solve_from(&mut grid, &mut masks, &mut rng, false));
        assert_eq!(grid, snapshot);
        assert_eq!(masks, masks_snapshot);
    }

    #[test]
    fn test_count_honors_limit() {
        let mut grid = Grid::new();
        let mut masks = masks_for(&grid);

        assert_eq!(count_solutions_from(&mut grid, &mut masks, 1), 1);
        assert_eq!(count_solutions_from(&mut grid, &mut masks, 5), 5);
        assert_eq!(grid, Grid::new());
    }
}
