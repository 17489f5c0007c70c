use std::fmt;
use std::fmt::Debug;

/// Coordinates of a grid cell.
///
/// Components are signed so that neighbor probes may land outside the grid;
/// the grid resolves such positions to "no cell" rather than failing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    row: i32,
    col: i32,
}

impl Pos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> i32 {
        self.row
    }

    pub fn col(self) -> i32 {
        self.col
    }

    /// The position offset by the given number of rows and columns
    pub fn shifted(self, rows: i32, cols: i32) -> Pos {
        Pos::new(self.row + rows, self.col + cols)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
