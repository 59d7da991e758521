//! FEN adapter. Converts between the textual position encoding and [`Game`].
//!
//! FEN carries no per-piece move history, so `has_moved` is reconstructed:
//! pawns off their start row count as moved, kings and rooks count as unmoved
//! only when a castling right still refers to them.

use crate::board::game::Game;
use crate::board::grid::Board;
use crate::board::moves::{CastleSide, CastlingRights};
use crate::board::types::{Color, Piece, PieceKind, Square};
use crate::error::ChessError;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Game {
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let bad = || ChessError::InvalidFen(fen.to_string());
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 || fields.len() > 6 {
            return Err(bad());
        }

        let mut board = parse_placement(fields[0]).ok_or_else(bad)?;
        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(bad()),
        };
        let castling = parse_castling(fields[2]).ok_or_else(bad)?;
        let en_passant = match fields[3] {
            "-" => None,
            s => Some(s.parse::<Square>().map_err(|_| bad())?),
        };
        let halfmove_clock = match fields.get(4) {
            Some(s) => s.parse().map_err(|_| bad())?,
            None => 0,
        };
        let fullmove_number = match fields.get(5) {
            Some(s) => s.parse().map_err(|_| bad())?,
            None => 1,
        };

        derive_has_moved(&mut board, &castling);
        Ok(Game { board, side_to_move, castling, en_passant, halfmove_clock, fullmove_number })
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for row in 0..8u8 {
            let mut gap = 0;
            for col in 0..8u8 {
                match self.board.get(Square::at(row, col)) {
                    Some(p) => {
                        if gap > 0 {
                            out.push(char::from(b'0' + gap));
                            gap = 0;
                        }
                        out.push(p.to_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push(char::from(b'0' + gap));
            }
            if row < 7 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        out.push(' ');
        let mut rights = String::new();
        if self.castling.white.king_side { rights.push('K'); }
        if self.castling.white.queen_side { rights.push('Q'); }
        if self.castling.black.king_side { rights.push('k'); }
        if self.castling.black.queen_side { rights.push('q'); }
        if rights.is_empty() { rights.push('-'); }
        out.push_str(&rights);
        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }
        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

fn parse_placement(s: &str) -> Option<Board> {
    let ranks: Vec<&str> = s.split('/').collect();
    if ranks.len() != 8 {
        return None;
    }
    let mut board = Board::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0u8;
        for c in rank.chars() {
            if let Some(d) = c.to_digit(10) {
                if !(1..=8).contains(&d) {
                    return None;
                }
                col += d as u8;
            } else {
                let kind = PieceKind::from_char(c)?;
                let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
                let sq = Square::new(row as u8, col)?;
                board.set(sq, Some(Piece::new(kind, color)));
                col += 1;
            }
            if col > 8 {
                return None;
            }
        }
        if col != 8 {
            return None;
        }
    }
    Some(board)
}

fn parse_castling(s: &str) -> Option<CastlingRights> {
    let mut rights = CastlingRights::none();
    if s == "-" {
        return Some(rights);
    }
    for c in s.chars() {
        match c {
            'K' => rights.white.king_side = true,
            'Q' => rights.white.queen_side = true,
            'k' => rights.black.king_side = true,
            'q' => rights.black.queen_side = true,
            _ => return None,
        }
    }
    Some(rights)
}

fn derive_has_moved(board: &mut Board, rights: &CastlingRights) {
    for (sq, piece) in board.pieces().collect::<Vec<_>>() {
        let color = piece.color;
        let home = sq.row() == color.home_row();
        let has_moved = match piece.kind {
            PieceKind::Pawn => sq.row() != color.pawn_row(),
            PieceKind::King => {
                let r = rights.side(color);
                !(home && sq.col() == 4 && (r.king_side || r.queen_side))
            }
            PieceKind::Rook => {
                let unmoved_corner = CastleSide::BOTH
                    .into_iter()
                    .any(|side| home && sq.col() == side.rook_col() && rights.allows(color, side));
                !unmoved_corner
            }
            _ => false,
        };
        board.set(sq, Some(Piece { has_moved, ..piece }));
    }
}
