use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{Color, Game, Move};
use crate::search::{SearchParams, Searcher};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub white_depth: u32,
    pub black_depth: u32,
    /// Plies played uniformly at random before the engine takes over.
    pub random_plies: usize,
    pub use_engine: bool,
    pub seed: u64,
    pub max_nodes: Option<u64>,
    pub start_fen: Option<String>,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self {
            games: 1,
            max_plies: 100,
            white_depth: 2,
            black_depth: 2,
            random_plies: 4,
            use_engine: true,
            seed: 42,
            max_nodes: None,
            start_fen: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub start_fen: String,
    pub moves: Vec<String>,
    /// 1 white win, 0 draw or unfinished, -1 black win.
    pub result: i8,
    pub termination: Termination,
    pub final_fen: String,
}

pub fn generate_games(params: &SelfPlayParams) -> anyhow::Result<Vec<GameRecord>> {
    let start = match params.start_fen.as_deref() {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::startpos(),
    };
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let record = play_one(&start, params, &mut rng);
        info!("game {} finished: {:?} result={} plies={}", gi + 1, record.termination, record.result, record.moves.len());
        games.push(record);
    }
    Ok(games)
}

fn play_one(start: &Game, params: &SelfPlayParams, rng: &mut SmallRng) -> GameRecord {
    let mut game = *start;
    let mut moves = Vec::new();
    let termination = loop {
        let legal = game.legal_moves();
        if legal.is_empty() {
            break if game.in_check() { Termination::Checkmate } else { Termination::Stalemate };
        }
        if moves.len() >= params.max_plies {
            break Termination::MaxPlies;
        }
        let mv = if !params.use_engine || moves.len() < params.random_plies {
            legal[rng.gen_range(0..legal.len())]
        } else {
            // The search always answers when a legal move exists.
            select_engine_move(&game, params).unwrap_or(legal[0])
        };
        moves.push(mv.to_string());
        game.play(&mv);
    };
    let result = match termination {
        // The side to move is the one that got mated.
        Termination::Checkmate if game.side_to_move == Color::White => -1,
        Termination::Checkmate => 1,
        _ => 0,
    };
    GameRecord { start_fen: start.to_fen(), moves, result, termination, final_fen: game.to_fen() }
}

fn select_engine_move(game: &Game, params: &SelfPlayParams) -> Option<Move> {
    let depth = match game.side_to_move {
        Color::White => params.white_depth,
        Color::Black => params.black_depth,
    };
    let p = SearchParams { depth, max_nodes: params.max_nodes, movetime: None };
    Searcher::default().search_with_params(game, p).best_move
}

/// Writes one JSON object per game.
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> anyhow::Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() {
            create_dir_all(dir)?;
        }
    }
    let mut w = BufWriter::new(File::create(&path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}
