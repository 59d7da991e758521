use std::io::{self, BufRead, Write};
use std::time::Duration;

use log::{debug, warn};

use crate::board::Game;
use crate::config::EngineConfig;
use crate::search::{SearchParams, Searcher};

pub struct UciEngine {
    game: Game,
    searcher: Searcher,
    config: EngineConfig,
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl UciEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { game: Game::startpos(), searcher: Searcher::default(), config }
    }

    pub fn game(&self) -> &Game { &self.game }

    fn cmd_uci(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "id name Gambit {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author Gambit Team")?;
        writeln!(out, "uciok")
    }

    fn cmd_position(&mut self, args: &str) {
        // position startpos [moves ...] | position fen <fen> [moves ...]
        let (setup, moves) = match args.split_once(" moves ") {
            Some((s, m)) => (s.trim(), m.split_whitespace().map(str::to_string).collect::<Vec<_>>()),
            None => (args.trim().trim_end_matches(" moves"), Vec::new()),
        };
        let base = if setup == "startpos" {
            Ok(Game::startpos())
        } else if let Some(fen) = setup.strip_prefix("fen ") {
            Game::from_fen(fen.trim())
        } else {
            warn!("unsupported position command: {}", args);
            return;
        };
        let mut game = match base {
            Ok(g) => g,
            Err(e) => {
                warn!("{}", e);
                return;
            }
        };
        if let Err(e) = game.play_moves(&moves) {
            warn!("{}", e);
            return;
        }
        self.game = game;
    }

    fn cmd_go(&mut self, args: &str, out: &mut impl Write) -> io::Result<()> {
        let mut params: SearchParams = self.config.search_params();
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            let value = tokens.clone().next().and_then(|s| s.parse::<u64>().ok());
            match (tok, value) {
                ("depth", Some(d)) => params.depth = u32::try_from(d).unwrap_or(u32::MAX).max(1),
                ("movetime", Some(t)) => params.movetime = Some(Duration::from_millis(t)),
                ("nodes", Some(n)) => params.max_nodes = Some(n),
                _ => continue,
            }
            tokens.next();
        }
        let res = self.searcher.search_with_params(&self.game, params);
        writeln!(out, "info depth {} score cp {} nodes {}", params.depth, self.side_relative(res.score), res.nodes)?;
        match res.best_move {
            Some(best) => writeln!(out, "bestmove {}", best),
            None => writeln!(out, "bestmove 0000"),
        }
    }

    /// UCI reports scores from the side to move; the engine scores for black.
    fn side_relative(&self, score: i32) -> i32 {
        self.game.side_to_move.sign() * score
    }

    /// Handles one command line. Returns `false` on `quit`.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let line = line.trim();
        debug!("uci <- {}", line);
        match line {
            "" | "stop" => {}
            "uci" => self.cmd_uci(out)?,
            "isready" => writeln!(out, "readyok")?,
            "ucinewgame" => self.game = Game::startpos(),
            "quit" => return Ok(false),
            "go" => self.cmd_go("", out)?,
            _ => {
                if let Some(rest) = line.strip_prefix("position ") {
                    self.cmd_position(rest);
                } else if let Some(rest) = line.strip_prefix("go ") {
                    self.cmd_go(rest, out)?;
                } else {
                    warn!("unknown command: {}", line);
                }
            }
        }
        out.flush()?;
        Ok(true)
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            if !self.handle_line(&line?, &mut stdout)? {
                break;
            }
        }
        Ok(())
    }
}
