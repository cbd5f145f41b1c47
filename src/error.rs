//! Error types for board access and parsing.

use thiserror::Error;

/// Errors raised by [`crate::board::Board`] accessors and parsers.
///
/// These all indicate caller bugs or malformed text; the search itself
/// never produces them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("cell ({row}, {col}) is out of range (rows and columns are 0..=2)")]
    OutOfRange { row: usize, col: usize },

    #[error("invalid cell value '{0}' (expected 'X', 'O' or ' ')")]
    InvalidCellValue(char),

    #[error("board string has {got} cells, expected {expected}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid move notation '{0}' (expected a letter A-C followed by a digit 0-2)")]
    InvalidNotation(String),
}
