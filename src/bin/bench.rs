use anyhow::Result;
use clap::Parser;
use gambit::board::Game;
use gambit::search::{SearchParams, Searcher};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "gambit-bench", version, about = "Benchmark Gambit search NPS")]
struct Args {
    /// FEN string or 'startpos'
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// Fixed search depth
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Optional movetime cap in milliseconds
    #[arg(long)]
    movetime: Option<u64>,

    /// Optional node cap
    #[arg(long)]
    nodes: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let game = if args.fen == "startpos" { Game::startpos() } else { Game::from_fen(&args.fen)? };

    let p = SearchParams { depth: args.depth, max_nodes: args.nodes, movetime: args.movetime.map(Duration::from_millis) };
    let mut s = Searcher::default();
    let t0 = Instant::now();
    let res = s.search_with_params(&game, p);
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { s.nodes() as f64 / dt.as_secs_f64() } else { 0.0 };
    let best = res.best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string());
    println!("bestmove={} score={} nodes={} elapsed={:.3}s nps={:.1}", best, res.score, s.nodes(), dt.as_secs_f64(), nps);
    Ok(())
}
