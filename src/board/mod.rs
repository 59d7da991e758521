pub mod fen;
pub mod game;
pub mod grid;
pub mod moves;
pub mod types;

pub use game::Game;
pub use grid::Board;
pub use moves::{next_en_passant, CastleSide, CastlingRights, Move, MoveKind, SideRights};
pub use types::{Color, Piece, PieceKind, Square};
