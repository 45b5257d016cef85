//! Error types for puzzle construction and loading.
//!
//! Solvers never fail; an unsolvable puzzle is a `None` solution.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the puzzle-solver crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PuzzleError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("grid dimensions differ: {from_rows}x{from_cols} vs target {to_rows}x{to_cols}")]
    DimensionMismatch {
        from_rows: usize,
        from_cols: usize,
        to_rows: usize,
        to_cols: usize,
    },

    #[error("{grid} grid must contain exactly one blank '*', found {found}")]
    BlankCount { grid: &'static str, found: usize },

    #[error("invalid marker '{marker}' at row {row}, column {col} (expected '*', '.' or '#')")]
    InvalidMarker { marker: char, row: usize, col: usize },

    #[error("invalid word '{word}': only lowercase ascii letters are allowed")]
    InvalidWord { word: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid puzzle definition: {0}")]
    Definition(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's error type
pub type Result<T> = std::result::Result<T, PuzzleError>;
