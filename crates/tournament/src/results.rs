//! Trial results storage and reporting

use chess_core::Side;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{TournamentConfig, TournamentError};

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameOutcome {
    /// The side to move was checkmated right after the winner's move
    Checkmate { winner: Side },
    /// Move cap reached; more pieces wins, equal counts draw
    Adjudicated { winner: Option<Side> },
    /// An agent had no move to offer; the game is drawn
    NoMove { side: Side },
    /// An agent offered a move the board rejected and loses
    Forfeit { loser: Side },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Side> {
        match *self {
            GameOutcome::Checkmate { winner } => Some(winner),
            GameOutcome::Adjudicated { winner } => winner,
            GameOutcome::NoMove { .. } => None,
            GameOutcome::Forfeit { loser } => Some(loser.other()),
        }
    }
}

/// Record of a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub trial: u32,
    pub outcome: GameOutcome,
    /// Moves successfully played
    pub moves: u32,
}

/// Summary of the measured agent's decision times, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DecisionStats {
    pub samples: usize,
    pub mean_secs: f64,
    /// Sample standard deviation (0 with fewer than two samples)
    pub stddev_secs: f64,
}

impl DecisionStats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self::default();
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let stddev = if n > 1 {
            let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };
        Self {
            samples: n,
            mean_secs: mean,
            stddev_secs: stddev,
        }
    }
}

/// Complete results of a trial run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialSummary {
    pub white: String,
    pub black: String,
    pub config: TournamentConfig,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    /// Decision times of the white agent
    pub decision_times: DecisionStats,
    pub games: Vec<GameRecord>,
}

impl TrialSummary {
    pub fn new(white: &str, black: &str, config: TournamentConfig) -> Self {
        Self {
            white: white.to_string(),
            black: black.to_string(),
            config,
            white_wins: 0,
            black_wins: 0,
            draws: 0,
            decision_times: DecisionStats::default(),
            games: Vec::new(),
        }
    }

    /// Add a game result
    pub fn record(&mut self, game: GameRecord) {
        match game.outcome.winner() {
            Some(Side::White) => self.white_wins += 1,
            Some(Side::Black) => self.black_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws
    }

    /// White's win rate in percent
    pub fn white_win_rate(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.white_wins) / f64::from(total) * 100.0
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Trials: {} vs {} ===\n\n", self.white, self.black));
        report.push_str(&format!(
            "Config: {} games, depth {}, move cap {}\n\n",
            self.config.trials, self.config.depth, self.config.max_moves
        ));

        report.push_str(&format!("{:<8} {:<14} {:>6}\n", "Game", "Result", "Moves"));
        report.push_str(&"-".repeat(30));
        report.push('\n');
        for game in &self.games {
            let result = match game.outcome.winner() {
                Some(Side::White) => "1-0",
                Some(Side::Black) => "0-1",
                None => "1/2",
            };
            report.push_str(&format!("{:<8} {:<14} {:>6}\n", game.trial, result, game.moves));
        }
        report.push('\n');

        report.push_str(&format!(
            "Win rate of {} (white): {:.1}%\n",
            self.white,
            self.white_win_rate()
        ));
        report.push_str(&format!("Black wins: {}\n", self.black_wins));
        report.push_str(&format!("Draws: {}\n", self.draws));
        report.push_str(&format!(
            "Average decision time for {}: {:.4} seconds\n",
            self.white, self.decision_times.mean_secs
        ));
        report.push_str(&format!(
            "Standard deviation of decision time: {:.4} seconds\n",
            self.decision_times.stddev_secs
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
