//! Gambit: a rules-complete chess engine with a minimax opponent.
pub mod board;
pub mod config;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod search;
pub mod selfplay;
pub mod uci;

pub use board::{Board, CastlingRights, Color, Game, Move, MoveKind, Piece, PieceKind, Square};
pub use error::ChessError;
pub use movegen::get_possible_moves;
pub use rules::{apply_move, filter_legal_moves, is_checkmate, is_king_in_check, is_stalemate, GameStatus};
pub use search::{evaluate_board, find_best_move};
