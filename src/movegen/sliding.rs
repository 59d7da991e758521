use crate::board::{Board, Move, Piece, Square};

/// Ray-casts along each direction until the edge, an own piece (excluded) or an
/// enemy piece (included as a capture).
pub fn generate_slider_moves(board: &Board, from: Square, piece: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.get(to) {
                None => out.push(Move::step(from, to, piece, None)),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move::step(from, to, piece, Some(target)));
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}
