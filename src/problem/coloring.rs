use log::debug;

use crate::error::InvalidSize;
use crate::grid::{Grid, Pos, PruneLog, Value};
use crate::problem::Rules;

/// Offsets of the four orthogonal neighbors
const ADJACENT: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Offsets of the eight cells two steps away: N, NE, E, SE, S, SW, W, NW
const DISTANT: [(i32, i32); 8] = [
    (-2, 0),
    (-1, 1),
    (0, 2),
    (1, 1),
    (2, 0),
    (1, -1),
    (0, -2),
    (-1, -1),
];

/// Minimum value gap between orthogonally adjacent cells
const ADJACENT_GAP: Value = 2;

/// Color the cells of a grid so that orthogonal neighbors get colors at
/// least two apart and cells two steps away get distinct colors.
///
/// The palette starts empty and grows by one color whenever a full search
/// over the current palette comes up dry, so the first solution found uses
/// the smallest palette that admits one.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridColoring;

impl Rules for GridColoring {
    fn initial_grid(&self, width: usize) -> Result<Grid, InvalidSize> {
        Grid::with_empty_domains(width)
    }

    fn is_consistent(&self, grid: &Grid, pos: Pos) -> bool {
        let value = match grid.value(pos) {
            Some(value) => value,
            None => return true,
        };
        let gap_ok = ADJACENT.iter().all(|&(rows, cols)| {
            grid.value(pos.shifted(rows, cols))
                .map_or(true, |peer| (peer - value).abs() >= ADJACENT_GAP)
        });
        gap_ok
            && DISTANT.iter().all(|&(rows, cols)| {
                grid.value(pos.shifted(rows, cols))
                    .map_or(true, |peer| peer != value)
            })
    }

    fn prune(&self, grid: &mut Grid, pos: Pos, value: Value, log: &mut PruneLog) {
        for &(rows, cols) in &ADJACENT {
            let peer = pos.shifted(rows, cols);
            grid.prune_value(peer, value - 1, log);
            grid.prune_value(peer, value + 1, log);
            grid.prune_value(peer, value, log);
        }
        for &(rows, cols) in &DISTANT {
            grid.prune_value(pos.shifted(rows, cols), value, log);
        }
    }

    fn expand_domains(&self, grid: &mut Grid) -> bool {
        if grid.palette_size() >= grid.cell_count() {
            return false;
        }
        grid.grow_palette();
        debug!("palette expanded to {}", grid.palette_size());
        true
    }
}
