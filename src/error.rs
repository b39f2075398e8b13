//! Error types for the tic-tac-toe Q-learning crate

use thiserror::Error;

use crate::tictactoe::Board;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move from '{from}' to '{to}': {reason}")]
    IllegalMove {
        from: Board,
        to: Board,
        reason: &'static str,
    },

    #[error("no legal actions available in state '{state}'")]
    NoLegalActions { state: Board },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedSnapshotVersion { found: u32, expected: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("snapshot encoding error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("snapshot decoding error: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
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
