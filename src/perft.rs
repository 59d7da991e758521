// Copy-per-node perft: every child owns its own game snapshot.
use crate::board::{Game, Move};

pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = game.legal_moves();
    if depth == 1 { return moves.len() as u64; }
    moves.iter().map(|m| perft(&game.after(m), depth - 1)).sum()
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game: &Game, depth: u32) -> Vec<(Move, u64)> {
    game.legal_moves()
        .into_iter()
        .map(|m| {
            let n = perft(&game.after(&m), depth.saturating_sub(1));
            (m, n)
        })
        .collect()
}
