use serde::Serialize;

use crate::board::{Board, CastlingRights, Color, Square};
use crate::rules::attack::is_king_in_check;
use crate::rules::legality::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Status of `color` given the live en-passant target and castling rights.
pub fn classify(board: &Board, color: Color, en_passant: Option<Square>, rights: &CastlingRights) -> GameStatus {
    let in_check = is_king_in_check(board, color);
    let can_move = has_legal_move(board, color, en_passant, rights);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Active,
    }
}

/// Board-only classification: no en-passant target, castling taken from the
/// `has_moved` flags.
fn classify_board(board: &Board, color: Color) -> GameStatus {
    classify(board, color, None, &CastlingRights::from_unmoved(board))
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    classify_board(board, color) == GameStatus::Checkmate
}

pub fn is_stalemate(board: &Board, color: Color) -> bool {
    classify_board(board, color) == GameStatus::Stalemate
}
