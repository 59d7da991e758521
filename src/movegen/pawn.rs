use crate::board::{Board, Move, Piece, PieceKind, Square};

pub fn generate_pawn_moves(board: &Board, from: Square, pawn: Piece, en_passant: Option<Square>, out: &mut Vec<Move>) {
    let color = pawn.color;
    let dir = color.forward();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            push_pawn_move(from, one, pawn, None, out);
            if from.row() == color.pawn_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if board.is_empty(two) {
                        out.push(Move::step(from, two, pawn, None));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(to) = from.offset(dir, d_col) else { continue };
        match board.get(to) {
            Some(target) if target.color != color => push_pawn_move(from, to, pawn, Some(target), out),
            Some(_) => {}
            None if en_passant == Some(to) => {
                // The double-pushed pawn sits beside us, on our own row.
                let beside = Square::at(from.row(), to.col());
                if let Some(victim) = board.get(beside) {
                    if victim.kind == PieceKind::Pawn && victim.color != color {
                        out.push(Move::en_passant(from, to, pawn, beside, victim));
                    }
                }
            }
            None => {}
        }
    }
}

/// Forward or capturing pawn move, fanned out into four moves on the last row.
fn push_pawn_move(from: Square, to: Square, pawn: Piece, target: Option<Piece>, out: &mut Vec<Move>) {
    if to.row() == pawn.color.promotion_row() {
        for promo in PieceKind::PROMOTIONS {
            out.push(Move::promotion(from, to, pawn, target, promo));
        }
    } else {
        out.push(Move::step(from, to, pawn, target));
    }
}
