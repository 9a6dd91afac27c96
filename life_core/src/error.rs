// error.rs - Error type shared by every fallible grid operation

use thiserror::Error;

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Everything that can go wrong building or stepping a grid.
///
/// All variants are caller mistakes: nothing here is transient, so nothing
/// is ever retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    /// Two arrays that must share a shape do not.
    #[error("shape mismatch: expected {}x{}, found {}x{}", expected.0, expected.1, found.0, found.1)]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A coordinate outside `0..rows` x `0..cols`.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Nested rows of differing length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A raw cell value that is neither 0 nor 1.
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },

    /// Fill density outside `[0, 1]`.
    #[error("density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    /// No pattern goes by that name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}
