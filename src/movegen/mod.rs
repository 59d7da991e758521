//! Pseudo-legal move generation. Moves obey piece geometry and occupancy but
//! may still leave the mover's king in check; see `rules::legality` for the filter.

pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;

use crate::board::{Board, CastlingRights, Color, Move, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Pseudo-legal moves for whatever stands on `sq`; empty when the square is empty.
pub fn get_possible_moves(board: &Board, sq: Square, en_passant: Option<Square>, rights: &CastlingRights) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    push_moves_from(board, sq, en_passant, rights, &mut out);
    out
}

/// Appends the pseudo-legal moves of the piece on `sq` to `out`.
pub fn push_moves_from(board: &Board, sq: Square, en_passant: Option<Square>, rights: &CastlingRights, out: &mut Vec<Move>) {
    let Some(piece) = board.get(sq) else { return };
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, sq, piece, en_passant, out),
        PieceKind::Knight => knight::generate_knight_moves(board, sq, piece, out),
        PieceKind::Bishop => sliding::generate_slider_moves(board, sq, piece, &DIAGONALS, out),
        PieceKind::Rook => sliding::generate_slider_moves(board, sq, piece, &ORTHOGONALS, out),
        PieceKind::Queen => {
            sliding::generate_slider_moves(board, sq, piece, &DIAGONALS, out);
            sliding::generate_slider_moves(board, sq, piece, &ORTHOGONALS, out);
        }
        PieceKind::King => king::generate_king_moves(board, sq, piece, rights, out),
    }
}

/// Union of pseudo-legal moves over every piece of `color`.
pub fn pseudo_moves_for(board: &Board, color: Color, en_passant: Option<Square>, rights: &CastlingRights) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (sq, _) in board.pieces_of(color) {
        push_moves_from(board, sq, en_passant, rights, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Game;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_square_yields_nothing() {
        let b = Board::startpos();
        let e4 = "e4".parse().unwrap();
        assert!(get_possible_moves(&b, e4, None, &CastlingRights::all()).is_empty());
    }

    #[test]
    fn startpos_has_twenty_pseudo_moves_per_side() {
        let b = Board::startpos();
        assert_eq!(pseudo_moves_for(&b, Color::White, None, &CastlingRights::all()).len(), 20);
        assert_eq!(pseudo_moves_for(&b, Color::Black, None, &CastlingRights::all()).len(), 20);
    }

    #[test]
    fn generation_is_idempotent() {
        let g = Game::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
        let first = pseudo_moves_for(&g.board, Color::White, g.en_passant, &g.castling);
        let second = pseudo_moves_for(&g.board, Color::White, g.en_passant, &g.castling);
        assert_eq!(first, second);
    }

    #[test]
    fn queen_in_open_centre_sees_27_squares() {
        let d4: Square = "d4".parse().unwrap();
        let b = Board::empty().with(d4, crate::board::Piece::new(PieceKind::Queen, Color::White));
        assert_eq!(get_possible_moves(&b, d4, None, &CastlingRights::none()).len(), 27);
    }
}
