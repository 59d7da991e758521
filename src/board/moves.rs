use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::grid::Board;
use crate::board::types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Capture,
    CastleKingside,
    CastleQueenside,
    EnPassant,
    Promotion,
    CaptureAndPromotion,
}

impl MoveKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant | MoveKind::CaptureAndPromotion)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveKind::Promotion | MoveKind::CaptureAndPromotion)
    }

    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            MoveKind::CastleKingside => Some(CastleSide::King),
            MoveKind::CastleQueenside => Some(CastleSide::Queen),
            _ => None,
        }
    }
}

/// An immutable description of one transition. Applying it never mutates the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub castling_rook_from: Option<Square>,
    pub castling_rook_to: Option<Square>,
    pub en_passant_capture: Option<Square>,
}

impl Move {
    fn base(from: Square, to: Square, kind: MoveKind, piece: Piece) -> Self {
        Move {
            from,
            to,
            kind,
            piece,
            captured: None,
            promotion: None,
            castling_rook_from: None,
            castling_rook_to: None,
            en_passant_capture: None,
        }
    }

    /// Quiet move or capture depending on what stands on `to`.
    pub fn step(from: Square, to: Square, piece: Piece, target: Option<Piece>) -> Self {
        match target {
            Some(victim) => Move { captured: Some(victim), ..Self::base(from, to, MoveKind::Capture, piece) },
            None => Self::base(from, to, MoveKind::Normal, piece),
        }
    }

    pub fn promotion(from: Square, to: Square, piece: Piece, target: Option<Piece>, promo: PieceKind) -> Self {
        let kind = if target.is_some() { MoveKind::CaptureAndPromotion } else { MoveKind::Promotion };
        Move { captured: target, promotion: Some(promo), ..Self::base(from, to, kind, piece) }
    }

    pub fn en_passant(from: Square, to: Square, piece: Piece, victim_sq: Square, victim: Piece) -> Self {
        Move {
            captured: Some(victim),
            en_passant_capture: Some(victim_sq),
            ..Self::base(from, to, MoveKind::EnPassant, piece)
        }
    }

    pub fn castle(king_from: Square, king: Piece, side: CastleSide) -> Self {
        let row = king_from.row();
        let kind = match side {
            CastleSide::King => MoveKind::CastleKingside,
            CastleSide::Queen => MoveKind::CastleQueenside,
        };
        Move {
            castling_rook_from: Some(Square::at(row, side.rook_col())),
            castling_rook_to: Some(Square::at(row, side.rook_target_col())),
            ..Self::base(king_from, Square::at(row, side.king_target_col()), kind, king)
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.kind.is_capture()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promotion {
            write!(f, "{}", p.to_char())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// Also the square the king passes over.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SideRights {
    pub king_side: bool,
    pub queen_side: bool,
}

/// Castling availability per color. Rights only ever get cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideRights,
    pub black: SideRights,
}

impl CastlingRights {
    pub const fn all() -> Self {
        let both = SideRights { king_side: true, queen_side: true };
        CastlingRights { white: both, black: both }
    }

    pub const fn none() -> Self {
        let neither = SideRights { king_side: false, queen_side: false };
        CastlingRights { white: neither, black: neither }
    }

    /// Rights implied by the `has_moved` flags alone: an unmoved king on its home
    /// square with an unmoved rook in the matching corner.
    pub fn from_unmoved(board: &Board) -> Self {
        let mut rights = Self::none();
        for color in [Color::White, Color::Black] {
            let row = color.home_row();
            let king_home = board.get(Square::at(row, 4));
            let king_ok = matches!(king_home, Some(p) if p.kind == PieceKind::King && p.color == color && !p.has_moved);
            if !king_ok {
                continue;
            }
            for side in CastleSide::BOTH {
                let rook = board.get(Square::at(row, side.rook_col()));
                if matches!(rook, Some(p) if p.kind == PieceKind::Rook && p.color == color && !p.has_moved) {
                    rights.set(color, side, true);
                }
            }
        }
        rights
    }

    #[inline]
    pub fn side(&self, color: Color) -> SideRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn allows(&self, color: Color, side: CastleSide) -> bool {
        let r = self.side(color);
        match side {
            CastleSide::King => r.king_side,
            CastleSide::Queen => r.queen_side,
        }
    }

    pub fn set(&mut self, color: Color, side: CastleSide, value: bool) {
        let r = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        match side {
            CastleSide::King => r.king_side = value,
            CastleSide::Queen => r.queen_side = value,
        }
    }

    pub fn clear(&mut self, color: Color, side: CastleSide) {
        self.set(color, side, false);
    }

    /// Clears whatever rights `mv` forfeits: king moves, rook moves off a corner,
    /// and rooks captured on their corner.
    pub fn update_for_move(&mut self, mv: &Move) {
        let mover = mv.piece.color;
        match mv.piece.kind {
            PieceKind::King => {
                self.clear(mover, CastleSide::King);
                self.clear(mover, CastleSide::Queen);
            }
            PieceKind::Rook => {
                if let Some(side) = corner_side(mover, mv.from) {
                    self.clear(mover, side);
                }
            }
            _ => {}
        }
        if let Some(victim) = mv.captured {
            if victim.kind == PieceKind::Rook {
                if let Some(side) = corner_side(victim.color, mv.to) {
                    self.clear(victim.color, side);
                }
            }
        }
    }

    pub fn updated_for_move(mut self, mv: &Move) -> Self {
        self.update_for_move(mv);
        self
    }
}

fn corner_side(color: Color, sq: Square) -> Option<CastleSide> {
    if sq.row() != color.home_row() {
        return None;
    }
    CastleSide::BOTH.into_iter().find(|s| s.rook_col() == sq.col())
}

/// En-passant target created by `mv`: the skipped square of a double pawn push.
pub fn next_en_passant(mv: &Move) -> Option<Square> {
    if mv.piece.kind != PieceKind::Pawn {
        return None;
    }
    let (r0, r1) = (mv.from.row(), mv.to.row());
    if r0.abs_diff(r1) == 2 {
        Some(Square::at((r0 + r1) / 2, mv.from.col()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn double_push_sets_target_single_push_does_not() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let double = Move::step(sq("e2"), sq("e4"), pawn, None);
        assert_eq!(next_en_passant(&double), Some(sq("e3")));
        let single = Move::step(sq("e2"), sq("e3"), pawn, None);
        assert_eq!(next_en_passant(&single), None);
    }

    #[test]
    fn rook_capture_on_corner_clears_opponent_right() {
        let mut rights = CastlingRights::all();
        let bishop = Piece::new(PieceKind::Bishop, Color::White);
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let mv = Move::step(sq("b7"), sq("a8"), bishop, Some(rook));
        rights.update_for_move(&mv);
        assert!(!rights.black.queen_side);
        assert!(rights.black.king_side);
        assert_eq!(rights.white, SideRights { king_side: true, queen_side: true });
    }

    #[test]
    fn king_move_clears_both_sides() {
        let king = Piece::new(PieceKind::King, Color::Black);
        let rights = CastlingRights::all().updated_for_move(&Move::step(sq("e8"), sq("e7"), king, None));
        assert_eq!(rights.black, SideRights::default());
        assert!(rights.white.king_side && rights.white.queen_side);
    }

    #[test]
    fn castle_move_fields() {
        let king = Piece::new(PieceKind::King, Color::White);
        let mv = Move::castle(sq("e1"), king, CastleSide::Queen);
        assert_eq!(mv.to, sq("c1"));
        assert_eq!(mv.castling_rook_from, Some(sq("a1")));
        assert_eq!(mv.castling_rook_to, Some(sq("d1")));
        assert_eq!(mv.to_string(), "e1c1");
    }
}
