pub mod apply;
pub mod attack;
pub mod legality;
pub mod status;

pub use apply::apply_move;
pub use attack::{is_king_in_check, is_square_attacked};
pub use legality::{filter_legal_moves, legal_moves_for};
pub use status::{classify, is_checkmate, is_stalemate, GameStatus};
