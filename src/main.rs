use anyhow::{bail, Result};
use clap::Parser;
use gambit::board::{Color, Game};
use gambit::config::{Difficulty, EngineConfig};
use gambit::rules::GameStatus;
use gambit::search::Searcher;
use gambit::uci::UciEngine;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the Gambit engine", long_about = None)]
struct Args {
    /// Opponent strength
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Operation mode: 'h' for human vs engine, 's' for self play, 'u' for UCI
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// JSON engine configuration; --difficulty overrides its tier
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn get_human_move(game: &Game) -> Result<gambit::Move> {
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            bail!("stdin closed");
        }
        match game.find_uci(input.trim()) {
            Ok(mv) => return Ok(mv),
            Err(e) => println!("{}", e),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(d) = args.difficulty {
        config.difficulty = d;
        config.depth = None;
    }

    let mode = args.mode.chars().next().unwrap_or('h');
    if mode == 'u' {
        UciEngine::new(config).run_loop()?;
        return Ok(());
    }
    let human_color = parse_color(&args.color)?;

    let mut game = match args.fen.as_deref() {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::startpos(),
    };
    let mut searcher = Searcher::default();

    loop {
        match game.status() {
            GameStatus::Checkmate => {
                println!("\n{}", game.board);
                let winner = if game.side_to_move == Color::White { "Black" } else { "White" };
                println!("Checkmate! {} wins!", winner);
                break;
            }
            GameStatus::Stalemate => {
                println!("\n{}", game.board);
                println!("Game is a stalemate!");
                break;
            }
            GameStatus::Active | GameStatus::Check => {}
        }
        if game.in_check() {
            println!("\nCheck!");
        }

        println!("\n{:?}'s turn", game.side_to_move);
        println!("{}", game.board);

        if mode == 'h' && game.side_to_move == human_color {
            let mv = get_human_move(&game)?;
            game.play(&mv);
            continue;
        }

        let start_time = Instant::now();
        let res = searcher.search_with_params(&game, config.search_params());
        let elapsed = start_time.elapsed();
        if args.verbose {
            let nps = res.nodes as f64 / elapsed.as_secs_f64().max(1e-9);
            println!("score: {} nodes: {} elapsed: {:.2}s nps: {:.0}", res.score, res.nodes, elapsed.as_secs_f64(), nps);
        }
        match res.best_move {
            Some(mv) => {
                println!("Computer plays: {}", mv);
                game.play(&mv);
            }
            None => {
                println!("No legal moves available!");
                break;
            }
        }
    }

    Ok(())
}
