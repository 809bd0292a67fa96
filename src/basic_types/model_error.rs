use thiserror::Error;

use crate::constraints::Cell;

/// Errors which can occur while building a [`Problem`](crate::engine::Problem) from a board
/// description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("the grid size must be at least 1")]
    InvalidGridSize,
    #[error("cage {cage} does not contain any cells")]
    EmptyCage { cage: usize },
    #[error("cage {cage} refers to cell {cell} which lies outside of the {size}x{size} grid")]
    CellOutOfRange { cage: usize, cell: Cell, size: usize },
    #[error("cage {cage} contains cell {cell} more than once")]
    DuplicateCell { cage: usize, cell: Cell },
    #[error("a variable named '{0}' already exists")]
    DuplicateVariableName(String),
}
