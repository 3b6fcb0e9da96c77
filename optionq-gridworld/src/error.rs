//! Errors in the gridworld.
use thiserror::Error;

/// Errors raised while building a [`Gridworld`](crate::Gridworld).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridworldError {
    #[error("Layout has no cells")]
    EmptyLayout,

    #[error("Row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Unknown cell {cell:?} at ({row}, {col})")]
    UnknownCell { cell: char, row: usize, col: usize },

    #[error("{what} ({row}, {col}) is not a floor cell")]
    NotFloor {
        what: String,
        row: usize,
        col: usize,
    },
}
