use crate::board::grid::Board;
use crate::board::moves::{next_en_passant, CastlingRights, Move};
use crate::board::types::{Color, PieceKind, Square};
use crate::error::ChessError;
use crate::rules::apply::apply_move;
use crate::rules::attack::is_king_in_check;
use crate::rules::legality::legal_moves_for;
use crate::rules::status::{classify, GameStatus};
use crate::search::alphabeta::find_best_move;

/// A live game: the board plus everything the rules need between plies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    /// Tracked and reported, never used to force a draw.
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Game {
    pub fn startpos() -> Self {
        Self::new(Board::startpos(), Color::White, CastlingRights::all(), None)
    }

    pub fn new(board: Board, side_to_move: Color, castling: CastlingRights, en_passant: Option<Square>) -> Self {
        Game { board, side_to_move, castling, en_passant, halfmove_clock: 0, fullmove_number: 1 }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves_for(&self.board, self.side_to_move, self.en_passant, &self.castling)
    }

    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move)
    }

    pub fn status(&self) -> GameStatus {
        classify(&self.board, self.side_to_move, self.en_passant, &self.castling)
    }

    /// Plays an already-legal move and advances every piece of bookkeeping.
    pub fn play(&mut self, mv: &Move) {
        apply_move(&mut self.board, mv);
        self.castling.update_for_move(mv);
        self.en_passant = next_en_passant(mv);
        if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = !self.side_to_move;
    }

    /// Copy of the game after `mv`.
    pub fn after(&self, mv: &Move) -> Self {
        let mut next = *self;
        next.play(mv);
        next
    }

    /// Looks up a legal move by its UCI text (`e2e4`, `e7e8q`).
    pub fn find_uci(&self, uci: &str) -> Result<Move, ChessError> {
        let illegal = || ChessError::IllegalMove(uci.to_string());
        if uci.len() != 4 && uci.len() != 5 {
            return Err(illegal());
        }
        let from: Square = uci.get(0..2).ok_or_else(illegal)?.parse()?;
        let to: Square = uci.get(2..4).ok_or_else(illegal)?.parse()?;
        let promotion = match uci.get(4..).ok_or_else(illegal)?.chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(k) if PieceKind::PROMOTIONS.contains(&k) => Some(k),
                _ => return Err(ChessError::InvalidPromotion(c)),
            },
        };
        self.legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion)
            .ok_or_else(illegal)
    }

    pub fn play_uci(&mut self, uci: &str) -> Result<Move, ChessError> {
        let mv = self.find_uci(uci)?;
        self.play(&mv);
        Ok(mv)
    }

    pub fn from_start_and_moves(moves: &[String]) -> Result<Self, ChessError> {
        let mut game = Self::startpos();
        game.play_moves(moves)?;
        Ok(game)
    }

    pub fn play_moves(&mut self, moves: &[String]) -> Result<(), ChessError> {
        for m in moves {
            self.play_uci(m)?;
        }
        Ok(())
    }

    /// Engine reply for the side to move at a fixed depth.
    pub fn best_move(&self, depth: u32) -> Option<Move> {
        find_best_move(&self.board, depth, self.side_to_move == Color::Black, self.en_passant, &self.castling)
    }
}
