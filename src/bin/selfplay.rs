use clap::Parser;
use gambit::selfplay::{generate_games, write_jsonl, SelfPlayParams};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gambit-selfplay", about = "Play engine-vs-engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: usize,
    #[arg(long, default_value_t = 100)]
    max_plies: usize,
    #[arg(long, default_value_t = 2)]
    white_depth: u32,
    #[arg(long, default_value_t = 2)]
    black_depth: u32,
    /// Opening plies chosen at random to diversify games
    #[arg(long, default_value_t = 4)]
    random_plies: usize,
    #[arg(long)]
    max_nodes: Option<u64>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = true)]
    use_engine: bool,
    #[arg(long)]
    fen: Option<String>,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let base = SelfPlayParams {
        games: 1,
        max_plies: a.max_plies,
        white_depth: a.white_depth,
        black_depth: a.black_depth,
        random_plies: a.random_plies,
        use_engine: a.use_engine,
        seed: a.seed,
        max_nodes: a.max_nodes,
        start_fen: a.fen,
    };
    eprintln!("Generating {} games (depth w={} b={}, engine={})", a.games, a.white_depth, a.black_depth, a.use_engine);

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}] {msg}")?);
    let mut games = Vec::with_capacity(a.games);
    for gi in 0..a.games {
        // One seed per game keeps each game reproducible on its own.
        let params = SelfPlayParams { seed: a.seed.wrapping_add(gi as u64), ..base.clone() };
        let mut batch = generate_games(&params)?;
        if let Some(g) = batch.first() {
            pb.set_message(format!("{:?} in {} plies", g.termination, g.moves.len()));
        }
        games.append(&mut batch);
        pb.inc(1);
    }
    pb.finish();

    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    Ok(())
}
