//! Error types for board construction, input parsing and solving.
//!
//! An unsolvable board is a normal search outcome and never surfaces here.

use thiserror::Error;

/// Smallest dimension the solver accepts.
pub const MIN_DIMENSION: usize = 2;

/// Dimensions at or above this bound are rejected by the solver.
pub const MAX_DIMENSION: usize = 128;

/// A tile layout that is not a valid sliding-puzzle state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The grid has no cells at all.
    #[error("board has no tiles")]
    Empty,

    /// A row length does not match the dimension, or the tile count is not a square.
    #[error("row {row} has {len} tiles, expected {dimension}")]
    NotSquare {
        /// 0-based row index.
        row: usize,
        /// Number of tiles found in that row.
        len: usize,
        /// Expected row length.
        dimension: usize,
    },

    /// A flat tile sequence whose length is not N².
    #[error("dimension {dimension} needs {dimension}² tiles, found {found}")]
    TileCount { dimension: usize, found: usize },

    /// N² - 1 labels do not fit in a tile.
    #[error("dimension {dimension} is too large to label every tile")]
    DimensionTooLarge { dimension: usize },

    /// A label outside `0..N²`.
    #[error("tile {tile} is out of range, labels must be in 0..={max}")]
    TileOutOfRange {
        /// The offending label.
        tile: u16,
        /// Largest allowed label.
        max: usize,
    },

    /// A label that appears more than once.
    #[error("tile {tile} appears more than once")]
    DuplicateTile {
        /// The repeated label.
        tile: u16,
    },
}

/// Errors raised before a search starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error(
        "board dimension {dimension} is outside the supported range {min}..{max}",
        min = MIN_DIMENSION,
        max = MAX_DIMENSION
    )]
    InvalidSize { dimension: usize },
}

/// Errors from reading the text input format.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read puzzle input")]
    Io(#[from] std::io::Error),

    #[error("input does not start with a board dimension")]
    MissingDimension,

    /// A token that is not a non-negative integer in range.
    #[error("line {line}: '{token}' is not a valid number")]
    InvalidNumber { line: usize, token: String },

    #[error("expected {expected} tiles but found {found}")]
    MissingTiles { expected: usize, found: usize },

    #[error("line {line}: unexpected input after the last tile")]
    TrailingInput { line: usize },

    #[error("invalid board")]
    Invalid(#[from] ValidationError),
}
