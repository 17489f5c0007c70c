use log::debug;

use crate::grid::{Grid, Pos, PruneLog, Value};
use crate::problem::{Problem, Rules};
use crate::solve::Strategy;

/// One full depth-first pass over the current domains. Returns the first
/// complete assignment found, leaving `grid` unwound to the state it was
/// in when the pass began.
pub(crate) fn search_solution(
    problem: &Problem,
    grid: &mut Grid,
    strategy: Strategy,
) -> Option<Grid> {
    let mut context = SearchContext {
        problem,
        grid,
        strategy,
        solution: None,
    };
    context.search_next(0);
    context.solution
}

struct SearchContext<'a> {
    problem: &'a Problem,
    grid: &'a mut Grid,
    strategy: Strategy,
    solution: Option<Grid>,
}

impl SearchContext<'_> {
    fn search_next(&mut self, depth: u32) -> bool {
        if self.grid.is_complete() {
            self.solution = Some(self.grid.clone());
            return true;
        }
        let pos = self.select_position();
        // snapshot the candidates: deeper trials mutate this domain
        let candidates: Vec<Value> = self.grid.domain(pos).iter().collect();
        for value in candidates {
            debug!("trying {} at {:?} (depth={})", value, pos, depth);
            self.grid.assign(pos, value);
            if !self.problem.is_consistent(self.grid, pos) {
                self.grid.unassign(pos);
                continue;
            }
            self.grid.mark_filled(pos);
            let log = self.propagate(pos, value);
            let found = self.search_next(depth + 1);
            if let Some(log) = log {
                log.restore(self.grid);
            }
            self.grid.clear_filled(pos);
            self.grid.unassign(pos);
            if found {
                return true;
            }
        }
        false
    }

    fn select_position(&self) -> Pos {
        let selected = match self.strategy {
            Strategy::Backtracking => self.grid.first_unfilled(),
            Strategy::ForwardChecking => self.grid.smallest_domain(),
        };
        selected.expect("no unfilled position in an incomplete grid")
    }

    fn propagate(&mut self, pos: Pos, value: Value) -> Option<PruneLog> {
        if self.strategy != Strategy::ForwardChecking {
            return None;
        }
        let mut log = PruneLog::default();
        self.problem.prune(self.grid, pos, value, &mut log);
        Some(log)
    }
}

#[cfg(test)]
mod tests {
    use super::search_solution;
    use crate::problem::{GridColoring, LatinSquare, Problem, Rules};
    use crate::solve::Strategy;

    #[test]
    fn a_successful_pass_unwinds_every_mutation() {
        let problem = Problem::from(LatinSquare);
        let mut grid = problem.initial_grid(2).unwrap();
        let reference = grid.clone();
        let solution = search_solution(&problem, &mut grid, Strategy::ForwardChecking);
        assert!(solution.is_some());
        for cell in 0..grid.cell_count() {
            let pos = grid.pos_of(cell);
            assert_eq!(reference.domain(pos), grid.domain(pos));
            assert_eq!(None, grid.value(pos));
        }
        assert_eq!(0, grid.filled_count());
    }

    #[test]
    fn a_failed_pass_unwinds_every_mutation() {
        let problem = Problem::from(GridColoring);
        let mut grid = problem.initial_grid(2).unwrap();
        // one color cannot separate adjacent cells by two
        assert!(problem.expand_domains(&mut grid));
        let reference = grid.clone();
        for strategy in &[Strategy::Backtracking, Strategy::ForwardChecking] {
            assert!(search_solution(&problem, &mut grid, *strategy).is_none());
            for cell in 0..grid.cell_count() {
                let pos = grid.pos_of(cell);
                assert_eq!(reference.domain(pos), grid.domain(pos));
                assert_eq!(None, grid.value(pos));
            }
            assert_eq!(0, grid.filled_count());
        }
    }
}
