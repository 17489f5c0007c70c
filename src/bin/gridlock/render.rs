//! Console rendering for solved and in-progress grids

use itertools::Itertools;
use once_cell::sync::Lazy;

use gridlock::grid::{Grid, Pos};

/// ANSI foreground codes, cycling values through the terminal's eight colors
static COLOR_CODES: Lazy<Vec<String>> =
    Lazy::new(|| (0..8).map(|c| format!("\x1b[3{}m", c)).collect());

const RESET: &str = "\x1b[0m";

pub(crate) fn grid(grid: &Grid, colored: bool) -> String {
    (0..grid.width() as i32)
        .map(|row| {
            (0..grid.width() as i32)
                .map(|col| match grid.value(Pos::new(row, col)) {
                    Some(value) if colored => format!(
                        "{}[{}]{}",
                        COLOR_CODES[value as usize % COLOR_CODES.len()],
                        value,
                        RESET
                    ),
                    Some(value) => format!("[{}]", value),
                    None => "[ ]".to_string(),
                })
                .join("")
        })
        .join("\n")
}

pub(crate) fn domains(grid: &Grid) -> String {
    (0..grid.cell_count())
        .map(|cell| {
            let pos = grid.pos_of(cell);
            format!("{:?}: {:?}", pos, grid.domain(pos))
        })
        .join("\n")
}
