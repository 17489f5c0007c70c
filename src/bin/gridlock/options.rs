use anyhow::{anyhow, Result};
use clap::ArgMatches;

use gridlock::problem::{GridColoring, LatinSquare, Problem};
use gridlock::solve::Strategy;

pub(crate) struct Options {
    problem: Problem,
    size: Option<usize>,
    strategies: Vec<Strategy>,
    show_domains: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let problem = match matches.value_of("problem").unwrap() {
            "coloring" => Problem::from(GridColoring),
            "latin" => Problem::from(LatinSquare),
            other => return Err(anyhow!("unknown problem: {}", other)),
        };
        let size = match matches.value_of("size") {
            Some(s) => Some(
                s.parse::<usize>()
                    .map_err(|_| anyhow!("invalid size: {}", s))?,
            ),
            None => None,
        };
        let strategies = match matches.value_of("strategy").unwrap() {
            "backtracking" => vec![Strategy::Backtracking],
            "forward-checking" => vec![Strategy::ForwardChecking],
            _ => vec![Strategy::Backtracking, Strategy::ForwardChecking],
        };
        Ok(Self {
            problem,
            size,
            strategies,
            show_domains: matches.is_present("show_domains"),
        })
    }

    pub fn problem(&self) -> Problem {
        self.problem
    }

    pub fn size(&self) -> Option<usize> {
        self.size
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn show_domains(&self) -> bool {
        self.show_domains
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Gridlock")
        .about("Solve grid coloring and Latin square puzzles")
        .arg(
            Arg::with_name("problem")
                .short("p")
                .long("problem")
                .takes_value(true)
                .value_name("PROBLEM")
                .possible_values(&["coloring", "latin"])
                .default_value("coloring")
                .help("the puzzle to solve")
                .display_order(1),
        )
        .arg(
            Arg::with_name("size")
                .short("n")
                .long("size")
                .takes_value(true)
                .value_name("SIZE")
                .help("grid width and height (randomized 1-10 when omitted)"),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .takes_value(true)
                .value_name("STRATEGY")
                .possible_values(&["backtracking", "forward-checking", "both"])
                .default_value("both")
                .help("the search strategy to run"),
        )
        .arg(
            Arg::with_name("show_domains")
                .long("show-domains")
                .help("print each cell's remaining domain after the run"),
        )
}
