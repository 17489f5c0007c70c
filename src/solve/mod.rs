//! Solve a problem grid by backtracking search

mod search;

use log::info;

use crate::error::InvalidSize;
use crate::grid::Grid;
use crate::problem::{Problem, Rules};

use self::search::search_solution;

/// How the search picks variables and whether it propagates assignments
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Try cells in row-major order; check constraints on assignment only
    Backtracking,
    /// Pick the cell with the smallest domain and prune peer domains after
    /// every consistent assignment
    ForwardChecking,
}

/// The result of a solve run
#[derive(Debug)]
pub enum Outcome {
    /// A complete consistent assignment, snapshotted at the moment the last
    /// cell was filled
    Solved(Grid),
    /// The whole search space was exhausted without completing the grid
    Exhausted,
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    pub fn solved(&self) -> Option<&Grid> {
        match self {
            Outcome::Solved(grid) => Some(grid),
            Outcome::Exhausted => None,
        }
    }
}

/// Owns one grid and drives one search run over it.
///
/// Build a fresh solver per run: a run mutates the grid in place (palette
/// growth survives the search even though assignments are unwound).
pub struct Solver {
    problem: Problem,
    grid: Grid,
}

impl Solver {
    pub fn new(problem: Problem, width: usize) -> Result<Self, InvalidSize> {
        let grid = problem.initial_grid(width)?;
        Ok(Self { problem, grid })
    }

    /// The working grid, fully unwound once `run` has returned
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Searches until a solution is found or the search space is exhausted.
    ///
    /// Whenever a full pass over the current domains comes up dry the
    /// problem is given a chance to expand them (grid coloring grows its
    /// palette by one color); the run only reports `Exhausted` once the
    /// problem declines. Expansion is monotonic and bounded, so the loop
    /// terminates.
    pub fn run(&mut self, strategy: Strategy) -> Outcome {
        loop {
            if let Some(solution) = search_solution(&self.problem, &mut self.grid, strategy) {
                info!(
                    "solved {}x{} with {:?}",
                    self.grid.width(),
                    self.grid.width(),
                    strategy
                );
                return Outcome::Solved(solution);
            }
            if !self.problem.expand_domains(&mut self.grid) {
                return Outcome::Exhausted;
            }
        }
    }
}
