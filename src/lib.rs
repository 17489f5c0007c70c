//! Solve grid coloring and Latin square puzzles with backtracking search

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

pub mod collections;
pub mod error;
pub mod grid;
pub mod problem;
pub mod solve;
