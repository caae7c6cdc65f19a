//! Error types for the nrow crate

use thiserror::Error;

/// Main error type for the nrow crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board size {size} (must be 3, 4 or 5)")]
    InvalidSize { size: usize },

    #[error("board is not square: row {row} has {got} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cell value '{value}' at row {row}, column {column} (expected empty, 0 or 1)")]
    InvalidCellValue {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("moves are not balanced: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    UnbalancedMoves { x_count: usize, o_count: usize },

    #[error("cannot continue a finished game")]
    GameAlreadyOver,

    #[error("position {position} is already occupied")]
    PositionOccupied { position: usize },

    #[error("position {position} is out of range (must be 1-{max})")]
    PositionOutOfRange { position: usize, max: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
