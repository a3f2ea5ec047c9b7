//! Match runner for playing trial games between two agents

use chess_core::{Agent, Board, GameBoard, Side};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::{TournamentConfig, TournamentError};
use crate::results::{DecisionStats, GameOutcome, GameRecord, TrialSummary};

/// Runs trial games between a white and a black agent
pub struct MatchRunner {
    config: TournamentConfig,
}

impl MatchRunner {
    pub fn new(config: TournamentConfig) -> Self {
        Self { config }
    }

    /// Play every configured trial.
    ///
    /// Decision times are measured for the white agent only.
    pub fn run_trials(
        &self,
        white: &mut dyn Agent,
        black: &mut dyn Agent,
    ) -> Result<TrialSummary, TournamentError> {
        check_seat(white, Side::White)?;
        check_seat(black, Side::Black)?;

        let mut summary = TrialSummary::new(white.name(), black.name(), self.config.clone());
        let mut decision_times = Vec::new();

        for trial in 1..=self.config.trials {
            white.new_game();
            black.new_game();

            let game = self.play_game(white, black, trial, &mut decision_times)?;
            info!(
                trial,
                moves = game.moves,
                outcome = ?game.outcome,
                "game finished"
            );
            summary.record(game);
        }

        summary.decision_times = DecisionStats::from_samples(&decision_times);
        Ok(summary)
    }

    /// Play a single game from the configured start position.
    ///
    /// Each white decision time (in seconds) is appended to `decision_times`.
    pub fn play_game(
        &self,
        white: &mut dyn Agent,
        black: &mut dyn Agent,
        trial: u32,
        decision_times: &mut Vec<f64>,
    ) -> Result<GameRecord, TournamentError> {
        let mut board = self.config.start_board()?;
        let mut moves = 0u32;

        loop {
            if moves > self.config.max_moves {
                let outcome = adjudicate(&board);
                debug!(trial, ?outcome, "move cap reached, adjudicating by piece count");
                return Ok(GameRecord {
                    trial,
                    outcome,
                    moves,
                });
            }

            let mover = board.turn();
            let agent: &mut dyn Agent = match mover {
                Side::White => &mut *white,
                Side::Black => &mut *black,
            };

            let started = Instant::now();
            let action = agent.choose_action(&board);
            if mover == Side::White {
                decision_times.push(started.elapsed().as_secs_f64());
            }

            let Some(mv) = action else {
                debug!(trial, side = %mover, "no move available, game drawn");
                return Ok(GameRecord {
                    trial,
                    outcome: GameOutcome::NoMove { side: mover },
                    moves,
                });
            };

            if !board.handle_move(mv) {
                warn!(trial, side = %mover, %mv, "invalid move, forfeiting");
                return Ok(GameRecord {
                    trial,
                    outcome: GameOutcome::Forfeit { loser: mover },
                    moves,
                });
            }
            moves += 1;

            if board.is_in_checkmate(board.turn()) {
                return Ok(GameRecord {
                    trial,
                    outcome: GameOutcome::Checkmate { winner: mover },
                    moves,
                });
            }
        }
    }
}

/// More pieces wins; equal counts draw.
pub fn adjudicate(board: &Board) -> GameOutcome {
    let white = board.piece_count(Side::White);
    let black = board.piece_count(Side::Black);
    let winner = match white.cmp(&black) {
        std::cmp::Ordering::Greater => Some(Side::White),
        std::cmp::Ordering::Less => Some(Side::Black),
        std::cmp::Ordering::Equal => None,
    };
    GameOutcome::Adjudicated { winner }
}

fn check_seat(agent: &dyn Agent, seat: Side) -> Result<(), TournamentError> {
    if agent.side() == seat {
        Ok(())
    } else {
        Err(TournamentError::SideMismatch {
            agent: agent.name().to_string(),
            expected: seat,
            actual: agent.side(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
