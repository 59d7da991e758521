use std::time::{Duration, Instant};

use log::debug;

use crate::board::{next_en_passant, Board, CastlingRights, Color, Game, Move, Square};
use crate::rules::apply::apply_move;
use crate::rules::legality::legal_moves_for;
use crate::search::eval::{evaluate_with, score_position, PositionFacts};

#[derive(Default, Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u32,
    pub max_nodes: Option<u64>,
    pub movetime: Option<Duration>,
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Black-positive evaluation of the chosen line.
    pub score: i32,
    pub nodes: u64,
}

/// A search node owns its board snapshot along with the per-ply rule state.
#[derive(Clone, Copy)]
struct Node {
    board: Board,
    en_passant: Option<Square>,
    rights: CastlingRights,
}

impl Node {
    fn child(&self, mv: &Move) -> Node {
        let mut board = self.board;
        apply_move(&mut board, mv);
        Node { board, en_passant: next_en_passant(mv), rights: self.rights.updated_for_move(mv) }
    }
}

#[inline]
fn side(maximizing: bool) -> Color {
    if maximizing { Color::Black } else { Color::White }
}

#[inline]
fn improves(maximizing: bool, score: i32, best: i32) -> bool {
    if maximizing { score > best } else { score < best }
}

/// Depth-limited minimax with alpha-beta pruning. The black side maximizes.
pub struct Searcher {
    nodes: u64,
    node_limit: u64,
    deadline: Option<Instant>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self { nodes: 0, node_limit: u64::MAX, deadline: None }
    }
}

impl Searcher {
    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn search_depth(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        en_passant: Option<Square>,
        rights: &CastlingRights,
    ) -> SearchResult {
        let root = Node { board: *board, en_passant, rights: *rights };
        let moves = legal_moves_for(board, side(maximizing), en_passant, rights);
        if moves.is_empty() {
            return SearchResult { best_move: None, score: evaluate_with(board, en_passant, rights), nodes: self.nodes };
        }

        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let child = root.child(&mv);
            let score = self.minimax(&child, depth.saturating_sub(1), i32::MIN, i32::MAX, !maximizing);
            if best_move.is_none() || improves(maximizing, score, best_score) {
                best_score = score;
                best_move = Some(mv);
            }
        }
        debug!(
            "search depth={} side={:?} best={} score={} nodes={}",
            depth,
            side(maximizing),
            best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
            best_score,
            self.nodes
        );
        SearchResult { best_move, score: best_score, nodes: self.nodes }
    }

    /// Applies node and time limits, then searches the side to move of `game`.
    pub fn search_with_params(&mut self, game: &Game, params: SearchParams) -> SearchResult {
        self.nodes = 0;
        self.node_limit = params.max_nodes.unwrap_or(u64::MAX);
        self.deadline = params.movetime.map(|d| Instant::now() + d);
        let maximizing = game.side_to_move == Color::Black;
        self.search_depth(&game.board, params.depth.max(1), maximizing, game.en_passant, &game.castling)
    }

    fn out_of_budget(&self) -> bool {
        if self.nodes >= self.node_limit {
            return true;
        }
        matches!(self.deadline, Some(dl) if Instant::now() >= dl)
    }

    fn minimax(&mut self, node: &Node, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.nodes += 1;
        let facts = PositionFacts::compute(&node.board, node.en_passant, &node.rights);
        if depth == 0 || facts.is_terminal() || self.out_of_budget() {
            return score_position(&node.board, &facts);
        }
        let moves = facts.legal(side(maximizing));
        if moves.is_empty() {
            return score_position(&node.board, &facts);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let score = self.minimax(&node.child(mv), depth - 1, alpha, beta, !maximizing);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Best move for the side to move, or `None` when it has no legal move.
/// `maximizing_second` is true when black is to move.
pub fn find_best_move(
    board: &Board,
    depth: u32,
    maximizing_second: bool,
    en_passant: Option<Square>,
    rights: &CastlingRights,
) -> Option<Move> {
    Searcher::default().search_depth(board, depth, maximizing_second, en_passant, rights).best_move
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_minimax(node: &Node, depth: u32, maximizing: bool) -> i32 {
        let facts = PositionFacts::compute(&node.board, node.en_passant, &node.rights);
        if depth == 0 || facts.is_terminal() {
            return score_position(&node.board, &facts);
        }
        let scores = facts.legal(side(maximizing)).iter().map(|mv| plain_minimax(&node.child(mv), depth - 1, !maximizing));
        if maximizing { scores.max().unwrap_or(i32::MIN) } else { scores.min().unwrap_or(i32::MAX) }
    }

    #[test]
    fn pruning_does_not_change_the_root_value() {
        for fen in [
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            "4k3/8/8/3q4/8/2N5/8/4K3 w - - 0 1",
            "6k1/5ppp/8/8/8/8/5PPP/R5K1 b - - 0 1",
        ] {
            let g = Game::from_fen(fen).unwrap();
            let maximizing = g.side_to_move == Color::Black;
            let root = Node { board: g.board, en_passant: g.en_passant, rights: g.castling };
            let expected = g
                .legal_moves()
                .iter()
                .map(|mv| plain_minimax(&root.child(mv), 1, !maximizing))
                .fold(if maximizing { i32::MIN } else { i32::MAX }, |a, b| if maximizing { a.max(b) } else { a.min(b) });
            let got = Searcher::default().search_depth(&g.board, 2, maximizing, g.en_passant, &g.castling);
            assert_eq!(got.score, expected, "{}", fen);
        }
    }

    #[test]
    fn no_legal_move_returns_none() {
        let g = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(g.best_move(2), None);
    }

    #[test]
    fn stalemated_non_mover_ends_the_line() {
        // Black to move with plenty of moves, but white has none and is not in check.
        let g = Game::from_fen("1k4r1/8/8/8/8/7p/7P/7K b - - 0 1").unwrap();
        let node = Node { board: g.board, en_passant: g.en_passant, rights: g.castling };
        assert!(!legal_moves_for(&g.board, Color::Black, None, &g.castling).is_empty());
        assert!(legal_moves_for(&g.board, Color::White, None, &g.castling).is_empty());

        let mut s = Searcher::default();
        let score = s.minimax(&node, 3, i32::MIN, i32::MAX, true);
        assert_eq!(score, crate::search::DRAW_SCORE);
        assert_eq!(s.nodes(), 1);
    }

    #[test]
    fn node_limit_still_returns_a_move() {
        let mut s = Searcher::default();
        let params = SearchParams { depth: 3, max_nodes: Some(50), movetime: None };
        let r = s.search_with_params(&Game::startpos(), params);
        assert!(r.best_move.is_some());
        assert!(r.nodes < 200, "node limit ignored: {}", r.nodes);
    }
}
