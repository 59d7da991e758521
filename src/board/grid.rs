use std::fmt;

use crate::board::types::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 mailbox board. `Copy` so every search frame can own its own snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Board { cells: [[None; 8]; 8] }
    }

    /// Standard initial setup, black on rows 0-1 and white on rows 6-7.
    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            b.cells[0][col] = Some(Piece::new(*kind, Color::Black));
            b.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            b.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            b.cells[7][col] = Some(Piece::new(*kind, Color::White));
        }
        b
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = piece;
    }

    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Convenience for building positions by hand.
    pub fn with(mut self, sq: Square, piece: Piece) -> Self {
        self.set(sq, Some(piece));
        self
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// First king of `color`; `None` on boards without one.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color).find(|(_, p)| p.kind == PieceKind::King).map(|(sq, _)| sq)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color).filter(|(_, p)| p.kind == kind).count()
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = self.get(Square::at(row, col)).map_or('.', Piece::to_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}
