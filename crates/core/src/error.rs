//! Errors reported by the puzzle grid.

use thiserror::Error;

use crate::types::Color;

/// Everything that can go wrong when building or touching a [`GridPuzzle`](crate::GridPuzzle).
///
/// None of these are transient. A failed call leaves the grid exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Requested grid size is below the minimum or needs more colors than the palette has
    #[error("grid size {size} is not supported (expected {min}..={max})")]
    InvalidSize { size: usize, min: usize, max: usize },

    /// Row or column index outside `[0, size)`
    #[error("index {index} is outside the {size}x{size} grid")]
    IndexOutOfRange { index: i32, size: usize },

    /// Explicit grid whose row length differs from its row count
    #[error("row {row} has {len} cells, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },

    /// Explicit grid containing a color outside the palette for its size
    #[error("cell ({row}, {col}) is {color:?}, which a {size}x{size} grid does not use")]
    ForeignColor {
        row: usize,
        col: usize,
        color: Color,
        size: usize,
    },
}
