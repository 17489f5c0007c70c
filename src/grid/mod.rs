//! The variable grid: cell assignments, the filled set, and per-cell domains

mod pos;
mod prune;

pub use self::pos::Pos;
pub use self::prune::PruneLog;

use crate::collections::{RangeSet, ValueSet};
use crate::error::InvalidSize;

/// Linear row-major index of a grid cell
pub type CellId = usize;
/// A value assigned to a grid cell (a color, or a Latin square symbol)
pub type Value = i32;

/// A square grid of cells, each either unassigned or holding one value.
///
/// The grid tracks which cells are filled (assigned and confirmed
/// consistent) and keeps one candidate-value domain per cell. It knows
/// nothing about what makes an assignment consistent; the problem rules
/// decide that and drive every mutation through the solver.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    cells: Vec<Option<Value>>,
    filled: RangeSet,
    domains: Vec<ValueSet>,
    palette: usize,
}

impl Grid {
    /// A grid whose domains start empty, to be grown one value at a time
    pub fn with_empty_domains(width: usize) -> Result<Self, InvalidSize> {
        Self::new(width, 0)
    }

    /// A grid whose domains hold `{0..width-1}` for the grid's lifetime
    pub fn with_full_domains(width: usize) -> Result<Self, InvalidSize> {
        Self::new(width, width)
    }

    fn new(width: usize, palette: usize) -> Result<Self, InvalidSize> {
        if width == 0 {
            return Err(InvalidSize(width));
        }
        let cell_count = width * width;
        let domain = if palette == 0 {
            ValueSet::new(0)
        } else {
            ValueSet::with_all(palette)
        };
        Ok(Self {
            width,
            cells: vec![None; cell_count],
            filled: RangeSet::new(cell_count),
            domains: vec![domain; cell_count],
            palette,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.width
    }

    /// Number of values currently admissible as candidates
    pub fn palette_size(&self) -> usize {
        self.palette
    }

    /// The cell at `pos`, or `None` if `pos` lies outside the grid
    pub fn cell_id(&self, pos: Pos) -> Option<CellId> {
        let width = self.width as i32;
        if pos.row() < 0 || pos.row() >= width || pos.col() < 0 || pos.col() >= width {
            return None;
        }
        Some(pos.row() as usize * self.width + pos.col() as usize)
    }

    pub fn pos_of(&self, cell: CellId) -> Pos {
        debug_assert!(cell < self.cell_count());
        Pos::new((cell / self.width) as i32, (cell % self.width) as i32)
    }

    /// The value assigned at `pos`; `None` if unassigned or out of range
    pub fn value(&self, pos: Pos) -> Option<Value> {
        self.cell_id(pos).and_then(|cell| self.cells[cell])
    }

    pub fn assign(&mut self, pos: Pos, value: Value) {
        let cell = self.require(pos);
        self.cells[cell] = Some(value);
    }

    pub fn unassign(&mut self, pos: Pos) {
        let cell = self.require(pos);
        self.cells[cell] = None;
    }

    pub fn mark_filled(&mut self, pos: Pos) {
        let cell = self.require(pos);
        debug_assert!(self.cells[cell].is_some());
        self.filled.insert(cell);
    }

    pub fn clear_filled(&mut self, pos: Pos) {
        let cell = self.require(pos);
        self.filled.remove(cell);
    }

    pub fn is_filled(&self, pos: Pos) -> bool {
        match self.cell_id(pos) {
            Some(cell) => self.filled.contains(cell),
            None => false,
        }
    }

    pub fn filled_count(&self) -> usize {
        self.filled.len()
    }

    /// True once every cell is filled, the sole success condition
    pub fn is_complete(&self) -> bool {
        self.filled.len() == self.cell_count()
    }

    pub fn filled_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.filled.iter().map(move |cell| self.pos_of(cell))
    }

    /// The first unfilled position in row-major order
    pub fn first_unfilled(&self) -> Option<Pos> {
        self.filled.first_missing().map(|cell| self.pos_of(cell))
    }

    /// The unfilled position with the fewest remaining candidates.
    ///
    /// Ties go to the first such cell in row-major order. The scan stops
    /// early on an empty domain since nothing can beat it.
    pub fn smallest_domain(&self) -> Option<Pos> {
        let mut best: Option<(CellId, usize)> = None;
        for cell in 0..self.cell_count() {
            if self.filled.contains(cell) {
                continue;
            }
            let len = self.domains[cell].len();
            if best.map_or(true, |(_, smallest)| len < smallest) {
                best = Some((cell, len));
                if len == 0 {
                    break;
                }
            }
        }
        best.map(|(cell, _)| self.pos_of(cell))
    }

    pub fn domain(&self, pos: Pos) -> &ValueSet {
        let cell = self.require(pos);
        &self.domains[cell]
    }

    /// Removes `value` from the domain at `pos`, recording the removal if it
    /// actually deleted something. Out-of-range positions and values are
    /// no-ops and leave the log untouched.
    pub fn prune_value(&mut self, pos: Pos, value: Value, log: &mut PruneLog) {
        let cell = match self.cell_id(pos) {
            Some(cell) => cell,
            None => return,
        };
        if self.domains[cell].remove(value) {
            log.record(cell, value);
        }
    }

    /// Grows the palette by one, adding the new top value to every domain
    pub fn grow_palette(&mut self) {
        let value = self.palette;
        for domain in &mut self.domains {
            domain.grow(value + 1);
            domain.insert(value as Value);
        }
        self.palette += 1;
    }

    pub(crate) fn restore_domain_value(&mut self, cell: CellId, value: Value) {
        let inserted = self.domains[cell].insert(value);
        assert!(
            inserted,
            "restored value {} at cell {} without a matching removal",
            value, cell
        );
    }

    fn require(&self, pos: Pos) -> CellId {
        match self.cell_id(pos) {
            Some(cell) => cell,
            None => panic!("position {:?} out of range", pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, Pos, PruneLog};

    #[test]
    fn zero_width_is_rejected() {
        assert!(Grid::with_empty_domains(0).is_err());
        assert!(Grid::with_full_domains(0).is_err());
    }

    #[test]
    fn out_of_range_probes_read_as_no_cell() {
        let grid = Grid::with_full_domains(2).unwrap();
        assert_eq!(None, grid.value(Pos::new(-1, 0)));
        assert_eq!(None, grid.value(Pos::new(0, 2)));
        assert_eq!(None, grid.cell_id(Pos::new(2, 0)));
        assert!(!grid.is_filled(Pos::new(0, -2)));
    }

    #[test]
    fn assignment_and_filled_bookkeeping() {
        let mut grid = Grid::with_full_domains(3).unwrap();
        let pos = Pos::new(1, 2);
        assert_eq!(None, grid.value(pos));
        grid.assign(pos, 2);
        assert_eq!(Some(2), grid.value(pos));
        assert!(!grid.is_filled(pos));
        grid.mark_filled(pos);
        assert!(grid.is_filled(pos));
        assert_eq!(1, grid.filled_count());
        grid.clear_filled(pos);
        grid.unassign(pos);
        assert_eq!(None, grid.value(pos));
        assert_eq!(0, grid.filled_count());
    }

    #[test]
    fn first_unfilled_is_row_major() {
        let mut grid = Grid::with_full_domains(2).unwrap();
        assert_eq!(Some(Pos::new(0, 0)), grid.first_unfilled());
        grid.assign(Pos::new(0, 0), 0);
        grid.mark_filled(Pos::new(0, 0));
        assert_eq!(Some(Pos::new(0, 1)), grid.first_unfilled());
    }

    #[test]
    fn smallest_domain_breaks_ties_first_found() {
        let mut grid = Grid::with_full_domains(2).unwrap();
        let mut log = PruneLog::default();
        grid.prune_value(Pos::new(1, 0), 0, &mut log);
        assert_eq!(Some(Pos::new(1, 0)), grid.smallest_domain());
        // equally small domains: the earlier cell wins
        grid.prune_value(Pos::new(1, 1), 0, &mut log);
        assert_eq!(Some(Pos::new(1, 0)), grid.smallest_domain());
    }

    #[test]
    fn grow_palette_reaches_every_domain() {
        let mut grid = Grid::with_empty_domains(2).unwrap();
        assert_eq!(0, grid.palette_size());
        assert!(grid.domain(Pos::new(0, 0)).is_empty());
        grid.grow_palette();
        grid.grow_palette();
        assert_eq!(2, grid.palette_size());
        for row in 0..2 {
            for col in 0..2 {
                let domain = grid.domain(Pos::new(row, col));
                assert_eq!(vec![0, 1], domain.iter().collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn prune_records_only_real_removals() {
        let mut grid = Grid::with_full_domains(2).unwrap();
        let mut log = PruneLog::default();
        grid.prune_value(Pos::new(0, 1), 1, &mut log);
        assert_eq!(1, log.len());
        // repeats and out-of-range probes go unrecorded
        grid.prune_value(Pos::new(0, 1), 1, &mut log);
        grid.prune_value(Pos::new(0, 1), 5, &mut log);
        grid.prune_value(Pos::new(-1, 0), 1, &mut log);
        assert_eq!(1, log.len());
        log.restore(&mut grid);
        assert!(grid.domain(Pos::new(0, 1)).contains(1));
    }

    #[test]
    #[should_panic]
    fn unmatched_restore_is_fatal() {
        let mut grid = Grid::with_full_domains(2).unwrap();
        let mut log = PruneLog::default();
        log.record(0, 1);
        // value 1 was never removed from cell 0
        log.restore(&mut grid);
    }
}
