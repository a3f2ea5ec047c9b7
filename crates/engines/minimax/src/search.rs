//! Fixed-depth minimax with alpha-beta pruning over cloned boards

use chess_core::{Coord, GameBoard, Move, Side, fingerprint};
use tracing::trace;

use crate::eval::{Perspective, evaluate};

/// Nudge applied to a child score depending on whether the move lands in
/// the center.
pub const CENTER_BONUS: f64 = 0.5;

/// Per-side fingerprint stacks along the current search path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histories {
    /// Positions where the agent was searching (maximizing frames).
    pub agent: Vec<u64>,
    /// Positions where the opponent was searching (minimizing frames).
    pub opponent: Vec<u64>,
}

impl Histories {
    pub fn new() -> Self {
        Self::default()
    }

    fn stack_mut(&mut self, perspective: Perspective) -> &mut Vec<u64> {
        match perspective {
            Perspective::Agent => &mut self.agent,
            Perspective::Opponent => &mut self.opponent,
        }
    }

    pub fn clear(&mut self) {
        self.agent.clear();
        self.opponent.clear();
    }
}

/// Score of a search frame and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub score: f64,
    /// None at leaves and when no move could be applied
    pub best_move: Option<Move>,
}

/// One top-level search over a borrowed pair of history stacks.
pub struct Searcher<'a> {
    agent: Side,
    histories: &'a mut Histories,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(agent: Side, histories: &'a mut Histories) -> Self {
        Self {
            agent,
            histories,
            nodes: 0,
        }
    }

    /// Frames entered so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Recursive minimax search with alpha-beta pruning.
    ///
    /// Leaves (depth exhausted or either side mated) are scored with the
    /// agent's history whichever side is to move. Interior frames push their
    /// fingerprint on the history of the side searching and pop it before
    /// returning.
    pub fn search<B: GameBoard>(
        &mut self,
        board: &B,
        depth: u8,
        alpha: f64,
        beta: f64,
        perspective: Perspective,
    ) -> SearchOutcome {
        self.nodes += 1;

        if depth == 0
            || board.is_in_checkmate(Side::White)
            || board.is_in_checkmate(Side::Black)
        {
            return self.leaf(board, perspective);
        }

        self.histories
            .stack_mut(perspective)
            .push(fingerprint(board));
        let expanded = self.expand(board, depth, alpha, beta, perspective);
        self.histories.stack_mut(perspective).pop();

        // Nothing could be played: fall back to the position itself.
        expanded.unwrap_or_else(|| self.leaf(board, perspective))
    }

    fn leaf<B: GameBoard>(&self, board: &B, perspective: Perspective) -> SearchOutcome {
        SearchOutcome {
            score: evaluate(board, self.agent, &self.histories.agent, perspective),
            best_move: None,
        }
    }

    /// Searches every applicable move. Returns `None` if none was applied.
    fn expand<B: GameBoard>(
        &mut self,
        board: &B,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        perspective: Perspective,
    ) -> Option<SearchOutcome> {
        let mover = perspective.mover(self.agent);
        let mut best_score = match perspective {
            Perspective::Agent => f64::NEG_INFINITY,
            Perspective::Opponent => f64::INFINITY,
        };
        let mut best_move = None;

        for mv in board.possible_moves(mover) {
            let mut child = board.clone();
            if !child.handle_move(mv) {
                trace!(%mv, "skipping rejected move");
                continue;
            }

            let score = self
                .search(&child, depth - 1, alpha, beta, perspective.flip())
                .score
                + center_nudge(mv.to, perspective);

            // Ties go to the move examined last.
            match perspective {
                Perspective::Agent => {
                    if score >= best_score {
                        best_score = score;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(score);
                }
                Perspective::Opponent => {
                    if score <= best_score {
                        best_score = score;
                        best_move = Some(mv);
                    }
                    beta = beta.min(score);
                }
            }

            if beta <= alpha {
                break;
            }
        }

        best_move.map(|mv| SearchOutcome {
            score: best_score,
            best_move: Some(mv),
        })
    }
}

/// `+0.5` for a center landing in an agent frame, `-0.5` in an opponent
/// frame; the opposite sign for any other destination.
pub(crate) fn center_nudge(to: Coord, perspective: Perspective) -> f64 {
    let nudge = if to.is_center() {
        CENTER_BONUS
    } else {
        -CENTER_BONUS
    };
    match perspective {
        Perspective::Agent => nudge,
        Perspective::Opponent => -nudge,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
