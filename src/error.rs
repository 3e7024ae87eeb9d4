//! Error types for position loading and move parsing.

use thiserror::Error;

/// Errors produced while parsing a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The string had no piece-placement field at all
    #[error("FEN string is empty")]
    Empty,

    /// A letter that is not one of `pnbrqkPNBRQK`
    #[error("invalid piece character '{0}' in piece placement")]
    InvalidPiece(char),

    /// A rank that does not describe exactly eight files, or the wrong number of ranks
    #[error("invalid piece placement: {0}")]
    InvalidLayout(String),

    /// Each side needs exactly one king
    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: &'static str, count: usize },

    #[error("invalid side to move '{0}' (expected 'w' or 'b')")]
    InvalidSideToMove(String),

    #[error("invalid castling rights '{0}'")]
    InvalidCastling(String),

    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
}

/// Errors produced while resolving a coordinate-notation move such as `e2e4`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("malformed move '{0}' (expected e.g. 'e2e4' or 'e7e8q')")]
    Malformed(String),

    #[error("move '{0}' is not legal in this position")]
    Illegal(String),
}
