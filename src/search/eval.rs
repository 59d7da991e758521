use crate::board::{Board, CastlingRights, Color, Move, PieceKind, Square};
use crate::rules::attack::is_king_in_check;
use crate::rules::legality::legal_moves_for;
use crate::search::pst::square_bonus;

// Scores are from black's point of view: positive favors the second side.
pub const MATE_SCORE: i32 = 10_000;
pub const DRAW_SCORE: i32 = 0;

const CHECK_BONUS: i32 = 50;
const PAWN_SHIELD_BONUS: i32 = 10;
const MOBILITY_WEIGHT: i32 = 2;

/// Per-side facts the evaluator and the search both need. Computing them once
/// per node keeps the legal-move enumeration from running twice.
#[derive(Debug, Clone)]
pub struct PositionFacts {
    pub legal: [Vec<Move>; 2],
    pub in_check: [bool; 2],
}

impl PositionFacts {
    pub fn compute(board: &Board, en_passant: Option<Square>, rights: &CastlingRights) -> Self {
        let side = |c: Color| legal_moves_for(board, c, en_passant, rights);
        PositionFacts {
            legal: [side(Color::White), side(Color::Black)],
            in_check: [is_king_in_check(board, Color::White), is_king_in_check(board, Color::Black)],
        }
    }

    #[inline]
    pub fn legal(&self, color: Color) -> &[Move] {
        &self.legal[color.index()]
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        self.in_check[color.index()]
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && self.legal(color).is_empty()
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.in_check(color) && self.legal(color).is_empty()
    }

    /// Checkmate or stalemate for either side.
    pub fn is_terminal(&self) -> bool {
        self.legal.iter().any(Vec::is_empty)
    }
}

/// Static evaluation of a bare board. Castling eligibility comes from the
/// `has_moved` flags and no en-passant target is assumed.
pub fn evaluate_board(board: &Board) -> i32 {
    evaluate_with(board, None, &CastlingRights::from_unmoved(board))
}

pub fn evaluate_with(board: &Board, en_passant: Option<Square>, rights: &CastlingRights) -> i32 {
    score_position(board, &PositionFacts::compute(board, en_passant, rights))
}

pub fn score_position(board: &Board, facts: &PositionFacts) -> i32 {
    if facts.is_checkmate(Color::White) {
        return MATE_SCORE;
    }
    if facts.is_checkmate(Color::Black) {
        return -MATE_SCORE;
    }
    if facts.is_stalemate(Color::White) || facts.is_stalemate(Color::Black) {
        return DRAW_SCORE;
    }

    let endgame = is_endgame(board);
    let mut score = 0;
    for (sq, piece) in board.pieces() {
        let s = piece.color.sign();
        score += s * (piece.kind.value() + square_bonus(piece.kind, piece.color, sq, endgame));
        if piece.kind == PieceKind::King {
            score += s * PAWN_SHIELD_BONUS * pawn_shield(board, sq, piece.color);
        }
    }

    if facts.in_check(Color::White) {
        score += CHECK_BONUS;
    }
    if facts.in_check(Color::Black) {
        score -= CHECK_BONUS;
    }

    let mobility = facts.legal(Color::Black).len() as i32 - facts.legal(Color::White).len() as i32;
    score + MOBILITY_WEIGHT * mobility
}

/// No queens on either side, or at most four pieces each.
pub fn is_endgame(board: &Board) -> bool {
    let no_queens = board.count(Color::White, PieceKind::Queen) == 0 && board.count(Color::Black, PieceKind::Queen) == 0;
    let sparse = board.piece_count(Color::White) <= 4 && board.piece_count(Color::Black) <= 4;
    no_queens || sparse
}

/// Friendly pawns on the three squares directly ahead of the king.
fn pawn_shield(board: &Board, king: Square, color: Color) -> i32 {
    (-1..=1)
        .filter_map(|dc| king.offset(color.forward(), dc))
        .filter(|&sq| matches!(board.get(sq), Some(p) if p.kind == PieceKind::Pawn && p.color == color))
        .count() as i32
}
