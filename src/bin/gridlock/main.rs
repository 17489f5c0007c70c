#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::time::Instant;

use anyhow::Result;
use rand::Rng;

use gridlock::problem::Problem;
use gridlock::solve::{Outcome, Solver, Strategy};

use crate::options::Options;

mod options;
mod render;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let width = options
        .size()
        .unwrap_or_else(|| rand::thread_rng().gen_range(1, 11));
    println!("{}, {}x{} grid", problem_name(options.problem()), width, width);
    for &strategy in options.strategies() {
        solve_one(&options, width, strategy)?;
    }
    Ok(())
}

fn solve_one(options: &Options, width: usize, strategy: Strategy) -> Result<()> {
    let colored = matches!(options.problem(), Problem::GridColoring(_));
    let mut solver = Solver::new(options.problem(), width)?;
    let start = Instant::now();
    let outcome = solver.run(strategy);
    println!();
    match &outcome {
        Outcome::Solved(solution) => {
            println!("{} solved in {:.2?}", strategy_name(strategy), start.elapsed());
            println!("{}", render::grid(solution, colored));
            if colored {
                println!("{} colors", solution.palette_size());
            }
        }
        Outcome::Exhausted => {
            println!("{} found no solution", strategy_name(strategy));
        }
    }
    if options.show_domains() {
        println!("{}", render::domains(solver.grid()));
    }
    Ok(())
}

fn problem_name(problem: Problem) -> &'static str {
    match problem {
        Problem::GridColoring(_) => "grid coloring",
        Problem::LatinSquare(_) => "latin square",
    }
}

fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Backtracking => "backtracking",
        Strategy::ForwardChecking => "forward checking",
    }
}
