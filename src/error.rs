use thiserror::Error;

/// Errors raised by the textual adapters (FEN, square and UCI move parsing).
/// The rules core itself never fails: it answers with empty move lists or `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("invalid promotion piece: {0}")]
    InvalidPromotion(char),
}
