use crate::board::{Board, Move, Piece, PieceKind};

/// Mutates `board` by `mv`. The move is trusted: no legality or consistency
/// checks happen here.
pub fn apply_move(board: &mut Board, mv: &Move) {
    board.set(mv.from, None);

    let placed = if mv.kind.is_promotion() {
        let kind = mv.promotion.unwrap_or(PieceKind::Queen);
        Piece { kind, ..mv.piece }.moved()
    } else {
        mv.piece.moved()
    };
    board.set(mv.to, Some(placed));

    if let (Some(rook_from), Some(rook_to)) = (mv.castling_rook_from, mv.castling_rook_to) {
        if let Some(rook) = board.take(rook_from) {
            board.set(rook_to, Some(rook.moved()));
        }
    }
    if let Some(victim_sq) = mv.en_passant_capture {
        board.set(victim_sq, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CastleSide, Color, MoveKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn quiet_move_marks_piece_moved() {
        let mut b = Board::startpos();
        let knight = b.get(sq("g1")).unwrap();
        apply_move(&mut b, &Move::step(sq("g1"), sq("f3"), knight, None));
        assert!(b.get(sq("g1")).is_none());
        let moved = b.get(sq("f3")).unwrap();
        assert_eq!(moved.kind, PieceKind::Knight);
        assert!(moved.has_moved);
    }

    #[test]
    fn promotion_without_choice_defaults_to_queen() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black).moved();
        let mut b = Board::empty().with(sq("c2"), pawn);
        let mut mv = Move::promotion(sq("c2"), sq("c1"), pawn, None, PieceKind::Knight);
        mv.promotion = None;
        assert_eq!(mv.kind, MoveKind::Promotion);
        apply_move(&mut b, &mv);
        let q = b.get(sq("c1")).unwrap();
        assert_eq!((q.kind, q.color), (PieceKind::Queen, Color::Black));
    }

    #[test]
    fn en_passant_clears_the_passed_pawn() {
        let white = Piece::new(PieceKind::Pawn, Color::White).moved();
        let black = Piece::new(PieceKind::Pawn, Color::Black).moved();
        let mut b = Board::empty().with(sq("e5"), white).with(sq("d5"), black);
        apply_move(&mut b, &Move::en_passant(sq("e5"), sq("d6"), white, sq("d5"), black));
        assert!(b.get(sq("d5")).is_none());
        assert!(b.get(sq("e5")).is_none());
        assert_eq!(b.get(sq("d6")).map(|p| p.color), Some(Color::White));
    }

    #[test]
    fn castling_relocates_the_rook() {
        let king = Piece::new(PieceKind::King, Color::Black);
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let mut b = Board::empty().with(sq("e8"), king).with(sq("h8"), rook);
        apply_move(&mut b, &Move::castle(sq("e8"), king, CastleSide::King));
        assert_eq!(b.get(sq("g8")).map(|p| p.kind), Some(PieceKind::King));
        let r = b.get(sq("f8")).unwrap();
        assert!(r.kind == PieceKind::Rook && r.has_moved);
        assert!(b.get(sq("h8")).is_none());
    }
}
