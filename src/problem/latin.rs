use ahash::AHashSet;

use crate::error::InvalidSize;
use crate::grid::{Grid, Pos, PruneLog, Value};
use crate::problem::Rules;

/// Fill a grid with values `0..N-1` so that no value repeats within a row
/// or a column. Domains are fixed at `{0..N-1}`; there is nothing to expand
/// when a search comes up dry.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatinSquare;

impl Rules for LatinSquare {
    fn initial_grid(&self, width: usize) -> Result<Grid, InvalidSize> {
        Grid::with_full_domains(width)
    }

    fn is_consistent(&self, grid: &Grid, pos: Pos) -> bool {
        let width = grid.width() as i32;
        let row = (0..width).map(|col| Pos::new(pos.row(), col));
        let col = (0..width).map(|row| Pos::new(row, pos.col()));
        all_distinct(grid, row) && all_distinct(grid, col)
    }

    fn prune(&self, grid: &mut Grid, pos: Pos, value: Value, log: &mut PruneLog) {
        let width = grid.width() as i32;
        for col in 0..width {
            if col != pos.col() {
                grid.prune_value(Pos::new(pos.row(), col), value, log);
            }
        }
        for row in 0..width {
            if row != pos.row() {
                grid.prune_value(Pos::new(row, pos.col()), value, log);
            }
        }
    }

    fn expand_domains(&self, _grid: &mut Grid) -> bool {
        false
    }
}

/// Whether the assigned values along the line are pairwise distinct,
/// stopping at the first duplicate
fn all_distinct(grid: &Grid, line: impl Iterator<Item = Pos>) -> bool {
    let mut seen: AHashSet<Value> = AHashSet::new();
    for pos in line {
        if let Some(value) = grid.value(pos) {
            if !seen.insert(value) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::LatinSquare;
    use crate::grid::{Pos, PruneLog};
    use crate::problem::Rules;

    #[test]
    fn duplicate_in_row_is_rejected() {
        let mut grid = LatinSquare.initial_grid(3).unwrap();
        grid.assign(Pos::new(0, 0), 1);
        grid.mark_filled(Pos::new(0, 0));
        grid.assign(Pos::new(0, 2), 1);
        assert!(!LatinSquare.is_consistent(&grid, Pos::new(0, 2)));
        grid.assign(Pos::new(0, 2), 0);
        assert!(LatinSquare.is_consistent(&grid, Pos::new(0, 2)));
    }

    #[test]
    fn duplicate_in_column_is_rejected() {
        let mut grid = LatinSquare.initial_grid(3).unwrap();
        grid.assign(Pos::new(0, 1), 2);
        grid.mark_filled(Pos::new(0, 1));
        grid.assign(Pos::new(2, 1), 2);
        assert!(!LatinSquare.is_consistent(&grid, Pos::new(2, 1)));
    }

    #[test]
    fn same_value_on_a_diagonal_is_fine() {
        let mut grid = LatinSquare.initial_grid(3).unwrap();
        grid.assign(Pos::new(0, 0), 1);
        grid.mark_filled(Pos::new(0, 0));
        grid.assign(Pos::new(1, 1), 1);
        assert!(LatinSquare.is_consistent(&grid, Pos::new(1, 1)));
    }

    #[test]
    fn prune_clears_the_value_from_row_and_column_only() {
        let mut grid = LatinSquare.initial_grid(3).unwrap();
        let mut log = PruneLog::default();
        LatinSquare.prune(&mut grid, Pos::new(1, 1), 2, &mut log);
        // two row peers and two column peers
        assert_eq!(4, log.len());
        assert!(!grid.domain(Pos::new(1, 0)).contains(2));
        assert!(!grid.domain(Pos::new(1, 2)).contains(2));
        assert!(!grid.domain(Pos::new(0, 1)).contains(2));
        assert!(!grid.domain(Pos::new(2, 1)).contains(2));
        // the assigned cell and the rest of the grid are untouched
        assert!(grid.domain(Pos::new(1, 1)).contains(2));
        assert!(grid.domain(Pos::new(0, 0)).contains(2));
        assert!(grid.domain(Pos::new(2, 2)).contains(2));
    }

    #[test]
    fn repeated_prunes_record_once() {
        let mut grid = LatinSquare.initial_grid(2).unwrap();
        let mut first = PruneLog::default();
        LatinSquare.prune(&mut grid, Pos::new(0, 0), 1, &mut first);
        assert_eq!(2, first.len());
        // a second trial deleting the same values finds nothing to record
        let mut second = PruneLog::default();
        LatinSquare.prune(&mut grid, Pos::new(0, 0), 1, &mut second);
        assert!(second.is_empty());
        first.restore(&mut grid);
        assert!(grid.domain(Pos::new(0, 1)).contains(1));
        assert!(grid.domain(Pos::new(1, 0)).contains(1));
    }
}
