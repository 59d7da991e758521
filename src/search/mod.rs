pub mod alphabeta;
pub mod eval;
pub mod pst;

pub use alphabeta::{find_best_move, SearchParams, SearchResult, Searcher};
pub use eval::{evaluate_board, evaluate_with, PositionFacts, DRAW_SCORE, MATE_SCORE};
