use crate::board::{Board, CastleSide, CastlingRights, Move, Piece, PieceKind, Square};
use crate::movegen::knight::push_leaper_moves;
use crate::movegen::KING_OFFSETS;

/// Adjacent steps plus castling. Castling here is purely geometric: whether the
/// king crosses an attacked square is decided by the legality filter.
pub fn generate_king_moves(board: &Board, from: Square, king: Piece, rights: &CastlingRights, out: &mut Vec<Move>) {
    push_leaper_moves(board, from, king, &KING_OFFSETS, out);

    let row = king.color.home_row();
    if king.has_moved || from != Square::at(row, 4) {
        return;
    }
    for side in CastleSide::BOTH {
        if !rights.allows(king.color, side) {
            continue;
        }
        let rook_col = side.rook_col();
        let rook_ok = matches!(
            board.get(Square::at(row, rook_col)),
            Some(p) if p.kind == PieceKind::Rook && p.color == king.color && !p.has_moved
        );
        if !rook_ok {
            continue;
        }
        let (lo, hi) = if rook_col < 4 { (rook_col + 1, 4) } else { (5, rook_col) };
        if (lo..hi).all(|col| board.is_empty(Square::at(row, col))) {
            out.push(Move::castle(from, king, side));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, MoveKind};

    fn castles(board: &Board, from: &str, rights: &CastlingRights) -> Vec<MoveKind> {
        let from: Square = from.parse().unwrap();
        let mut out = Vec::new();
        generate_king_moves(board, from, board.get(from).unwrap(), rights, &mut out);
        out.into_iter().map(|m| m.kind).filter(|k| k.castle_side().is_some()).collect()
    }

    fn castling_board() -> Board {
        Board::empty()
            .with("e1".parse().unwrap(), Piece::new(PieceKind::King, Color::White))
            .with("a1".parse().unwrap(), Piece::new(PieceKind::Rook, Color::White))
            .with("h1".parse().unwrap(), Piece::new(PieceKind::Rook, Color::White))
    }

    #[test]
    fn both_castles_when_path_clear() {
        let kinds = castles(&castling_board(), "e1", &CastlingRights::all());
        assert_eq!(kinds, vec![MoveKind::CastleKingside, MoveKind::CastleQueenside]);
    }

    #[test]
    fn no_castle_without_rights_or_with_blocker() {
        assert!(castles(&castling_board(), "e1", &CastlingRights::none()).is_empty());
        let blocked = castling_board().with("b1".parse().unwrap(), Piece::new(PieceKind::Knight, Color::White));
        assert_eq!(castles(&blocked, "e1", &CastlingRights::all()), vec![MoveKind::CastleKingside]);
    }

    #[test]
    fn moved_rook_cannot_castle() {
        let b = castling_board().with("h1".parse().unwrap(), Piece::new(PieceKind::Rook, Color::White).moved());
        assert_eq!(castles(&b, "e1", &CastlingRights::all()), vec![MoveKind::CastleQueenside]);
    }
}
