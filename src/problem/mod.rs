//! Problem rules: what makes an assignment consistent, and which peer
//! domains forward checking may prune

mod coloring;
mod latin;

pub use self::coloring::GridColoring;
pub use self::latin::LatinSquare;

use enum_dispatch::enum_dispatch;

use crate::error::InvalidSize;
use crate::grid::{Grid, Pos, PruneLog, Value};

/// The constraint rules for one problem variant.
///
/// Rules only ever read assignments and mutate domains; the solver owns all
/// control flow and performs every assignment, undo, and restore itself.
#[enum_dispatch]
pub trait Rules {
    /// A fresh grid with the domains this problem starts from
    fn initial_grid(&self, width: usize) -> Result<Grid, InvalidSize>;

    /// Whether the value assigned at `pos` is consistent with its already
    /// assigned peers. Unassigned and out-of-range peers never conflict.
    fn is_consistent(&self, grid: &Grid, pos: Pos) -> bool;

    /// Removes from peer domains every candidate that assigning `value` at
    /// `pos` has made impossible, recording the removals that deleted
    /// something in `log`.
    fn prune(&self, grid: &mut Grid, pos: Pos, value: Value, log: &mut PruneLog);

    /// Gives every domain one more candidate value after a fruitless full
    /// search, if this problem supports that; returns false once it cannot
    /// (or never could) expand, at which point the search is exhausted.
    fn expand_domains(&self, grid: &mut Grid) -> bool;
}

/// The two supported problem variants
#[enum_dispatch(Rules)]
#[derive(Clone, Copy, Debug)]
pub enum Problem {
    GridColoring,
    LatinSquare,
}
