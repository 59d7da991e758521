use crate::board::{Board, CastlingRights, Color, Move, Square};
use crate::movegen::pseudo_moves_for;
use crate::rules::apply::apply_move;
use crate::rules::attack::{is_king_in_check, is_square_attacked};

/// Keeps the moves that do not leave `color`'s king attacked.
///
/// Castling is additionally refused when the king starts in check or passes
/// over an attacked square; the landing square is covered by the general test.
pub fn filter_legal_moves(board: &Board, moves: &[Move], color: Color) -> Vec<Move> {
    moves.iter().filter(|mv| is_legal(board, mv, color)).copied().collect()
}

fn is_legal(board: &Board, mv: &Move, color: Color) -> bool {
    if let Some(side) = mv.kind.castle_side() {
        let passed = Square::at(mv.from.row(), side.rook_target_col());
        if is_square_attacked(board, mv.from, !color) || is_square_attacked(board, passed, !color) {
            return false;
        }
    }
    let mut scratch = *board;
    apply_move(&mut scratch, mv);
    !is_king_in_check(&scratch, color)
}

/// Every legal move for `color` given the current en-passant target and rights.
pub fn legal_moves_for(board: &Board, color: Color, en_passant: Option<Square>, rights: &CastlingRights) -> Vec<Move> {
    let pseudo = pseudo_moves_for(board, color, en_passant, rights);
    filter_legal_moves(board, &pseudo, color)
}

/// Short-circuiting variant of `!legal_moves_for(..).is_empty()`.
pub fn has_legal_move(board: &Board, color: Color, en_passant: Option<Square>, rights: &CastlingRights) -> bool {
    pseudo_moves_for(board, color, en_passant, rights).iter().any(|mv| is_legal(board, mv, color))
}
