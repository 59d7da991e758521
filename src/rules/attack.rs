//! Check detection. Runs once per candidate move in the legality filter, so it
//! probes outward from the target square instead of building enemy move lists.

use crate::board::{Board, Color, PieceKind, Square};
use crate::movegen::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};

/// True iff some piece of `by` has a pseudo-legal move landing on `sq`.
///
/// Castling, en passant and pawn pushes never land on an occupied square, so
/// only capture geometry matters here.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    let hits = |dr: i8, dc: i8, kind: PieceKind| {
        matches!(sq.offset(dr, dc).and_then(|s| board.get(s)), Some(p) if p.color == by && p.kind == kind)
    };

    // A pawn of `by` captures one row forward, so it stands one row behind `sq`.
    let back = -by.forward();
    if hits(back, -1, PieceKind::Pawn) || hits(back, 1, PieceKind::Pawn) {
        return true;
    }
    if KNIGHT_OFFSETS.iter().any(|&(dr, dc)| hits(dr, dc, PieceKind::Knight)) {
        return true;
    }
    if KING_OFFSETS.iter().any(|&(dr, dc)| hits(dr, dc, PieceKind::King)) {
        return true;
    }
    ray_hits(board, sq, by, &DIAGONALS, PieceKind::Bishop) || ray_hits(board, sq, by, &ORTHOGONALS, PieceKind::Rook)
}

fn ray_hits(board: &Board, sq: Square, by: Color, dirs: &[(i8, i8)], slider: PieceKind) -> bool {
    for &(dr, dc) in dirs {
        let mut cur = sq;
        while let Some(next) = cur.offset(dr, dc) {
            if let Some(p) = board.get(next) {
                if p.color == by && (p.kind == slider || p.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cur = next;
        }
    }
    false
}

/// Whether `color`'s king is attacked. A board without that king is reported as
/// not in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, !color),
        None => false,
    }
}
