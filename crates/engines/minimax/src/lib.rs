//! Minimax Chess Agent
//!
//! Fixed-depth minimax with alpha-beta pruning and a repetition-aware
//! heuristic evaluation.
//!
//! The agent explores each candidate move on its own cloned board, keeps
//! one fingerprint stack per side along the current line, and penalises
//! positions that keep coming back.

mod eval;
mod search;

use chess_core::{Agent, Board, GameBoard, Move, Side};
use tracing::debug;

pub use eval::{
    MATE_SCORE, Perspective, REPETITION_PENALTY, REPETITION_THRESHOLD, evaluate, piece_value,
};
pub use search::{CENTER_BONUS, Histories, SearchOutcome, Searcher};

/// Ply budget used when none is configured.
pub const DEFAULT_DEPTH: u8 = 2;

/// Statistics from the agent's most recent decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStats {
    /// Root score from the agent's point of view
    pub score: f64,
    pub best_move: Option<Move>,
    /// Number of frames entered
    pub nodes: u64,
    pub depth: u8,
}

/// Chess agent choosing moves by fixed-depth minimax with alpha-beta pruning.
///
/// This agent uses:
/// - Minimax over cloned boards, alpha-beta cutoffs, last-best-on-tie
/// - Perspective-weighted material, king safety and mate scoring
/// - Per-side Zobrist history stacks for a repetition penalty
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    side: Side,
    depth: u8,
    histories: Histories,
    last: Option<SearchStats>,
}

impl MinimaxAgent {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            depth: DEFAULT_DEPTH,
            histories: Histories::new(),
            last: None,
        }
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn histories(&self) -> &Histories {
        &self.histories
    }

    pub fn last_search(&self) -> Option<SearchStats> {
        self.last
    }

    /// Searches `board` to the configured depth and returns the best move,
    /// or `None` if the agent has nothing it can play.
    pub fn choose_move<B: GameBoard>(&mut self, board: &B) -> Option<Move> {
        let mut searcher = Searcher::new(self.side, &mut self.histories);
        let outcome = searcher.search(
            board,
            self.depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            Perspective::Agent,
        );
        let nodes = searcher.nodes();

        debug!(
            side = %self.side,
            depth = self.depth,
            nodes,
            score = outcome.score,
            best_move = ?outcome.best_move,
            "minimax decision"
        );

        self.last = Some(SearchStats {
            score: outcome.score,
            best_move: outcome.best_move,
            nodes,
            depth: self.depth,
        });
        outcome.best_move
    }
}

impl Agent for MinimaxAgent {
    fn choose_action(&mut self, board: &Board) -> Option<Move> {
        self.choose_move(board)
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.histories.clear();
        self.last = None;
    }
}
