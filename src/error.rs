use thiserror::Error;

/// Returned when constructing a grid with no cells
#[derive(Error, Debug)]
#[error("invalid grid size: {0}")]
pub struct InvalidSize(pub usize);
