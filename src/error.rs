//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board size must be at least 1, got {size}")]
    InvalidBoardSize { size: usize },

    #[error("board string has {got} cells in '{context}', which is not a square number")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("illegal move ({row}, {col}) from '{agent}'")]
    IllegalMove {
        row: usize,
        col: usize,
        agent: String,
    },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("game already over")]
    GameOver,

    #[error("input closed while waiting for a move")]
    InputClosed,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid player kind '{input}'. Expected one of: {expected}")]
    ParsePlayerKind { input: String, expected: String },

    #[error("invalid mode '{input}'. Expected one of: {expected}")]
    ParseMode { input: String, expected: String },

    #[error("invalid objective '{input}'. Expected one of: {expected}")]
    ParseObjective { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
