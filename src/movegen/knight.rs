use crate::board::{Board, Move, Piece, Square};
use crate::movegen::KNIGHT_OFFSETS;

pub fn generate_knight_moves(board: &Board, from: Square, knight: Piece, out: &mut Vec<Move>) {
    push_leaper_moves(board, from, knight, &KNIGHT_OFFSETS, out);
}

/// Single-step moves to fixed offsets; shared with the king.
pub(crate) fn push_leaper_moves(board: &Board, from: Square, piece: Piece, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in offsets {
        let Some(to) = from.offset(dr, dc) else { continue };
        match board.get(to) {
            Some(target) if target.color == piece.color => {}
            target => out.push(Move::step(from, to, piece, target)),
        }
    }
}
