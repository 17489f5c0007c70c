use crate::grid::{CellId, Grid, Value};

/// Record of the domain values a forward-checking trial actually removed.
///
/// Removals that found nothing to delete are never recorded, so restoring
/// the log puts back exactly the values this trial took away and nothing a
/// different trial removed for its own reasons.
#[derive(Debug, Default)]
pub struct PruneLog {
    removals: Vec<(CellId, Value)>,
}

impl PruneLog {
    pub fn record(&mut self, cell: CellId, value: Value) {
        self.removals.push((cell, value));
    }

    pub fn len(&self) -> usize {
        self.removals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty()
    }

    /// Re-inserts every recorded removal, consuming the log
    pub fn restore(self, grid: &mut Grid) {
        for (cell, value) in self.removals {
            grid.restore_domain_value(cell, value);
        }
    }
}
