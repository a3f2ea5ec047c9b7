//! Tournament configuration and errors

use std::io;
use std::path::{Path, PathBuf};

use chess_core::{Board, BoardError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of games per run
pub const DEFAULT_TRIALS: u32 = 10;

/// Moves played before a game is adjudicated by piece count
pub const DEFAULT_MAX_MOVES: u32 = 1000;

/// Errors raised by the tournament harness.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("{agent} plays {actual} but was seated as {expected}")]
    SideMismatch {
        agent: String,
        expected: chess_core::Side,
        actual: chess_core::Side,
    },
}

/// Tournament configuration, read from TOML. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TournamentConfig {
    /// Number of games to play
    pub trials: u32,
    /// Move cap before piece-count adjudication
    pub max_moves: u32,
    /// Search depth for the minimax agent
    pub depth: u8,
    /// Seed for the random opponent (None = fresh entropy)
    pub seed: Option<u64>,
    /// Starting position (None = initial position)
    pub start_fen: Option<String>,
    /// Where to write the JSON results
    pub output: Option<PathBuf>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_moves: DEFAULT_MAX_MOVES,
            depth: minimax_engine::DEFAULT_DEPTH,
            seed: None,
            start_fen: None,
            output: None,
        }
    }
}

impl TournamentConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(contents)?)
    }

    /// Board every game starts from.
    pub fn start_board(&self) -> Result<Board, TournamentError> {
        match &self.start_fen {
            Some(fen) => Ok(Board::from_fen(fen)?),
            None => Ok(Board::startpos()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
