use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::search::SearchParams;

/// Opponent strength tiers. Each maps to a fixed search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Overrides the difficulty depth when set.
    pub depth: Option<u32>,
    pub movetime_ms: Option<u64>,
    pub max_nodes: Option<u64>,
}

impl EngineConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("read engine config: {}", path.display()))?;
        let cfg: Self = serde_json::from_str(&text).with_context(|| format!("parse engine config: {}", path.display()))?;
        info!("loaded engine config from {}: {:?}", path.display(), cfg);
        Ok(cfg)
    }

    pub fn depth(&self) -> u32 {
        self.depth.unwrap_or_else(|| self.difficulty.depth()).max(1)
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            depth: self.depth(),
            max_nodes: self.max_nodes,
            movetime: self.movetime_ms.map(Duration::from_millis),
        }
    }
}
