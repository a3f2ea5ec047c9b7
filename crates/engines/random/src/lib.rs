//! Random Move Chess Agent
//!
//! A simple agent that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - The baseline opponent in match trials (the minimax agent should beat it)
//! - Exercising the match harness without search cost

use chess_core::{Agent, Board, GameBoard, Move, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A chess agent that plays random legal moves.
///
/// This agent provides no evaluation - it simply picks a random move
/// from all moves available to its side. A seeded agent replays the same
/// choices given the same positions.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    side: Side,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_action(&mut self, board: &Board) -> Option<Move> {
        let moves = board.possible_moves(self.side);
        moves.choose(&mut self.rng).copied()
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
