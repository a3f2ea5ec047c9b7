//! Heuristic position evaluation for the minimax agent.
//!
//! Scores are in pawns, higher is better for the agent. Material is
//! attributed by the perspective of the frame doing the scoring, not by the
//! colour of the piece: an agent frame counts every piece for the agent, an
//! opponent frame counts every piece against it at a heavier weight.

use chess_core::{GameBoard, KingView, PieceKind, Side, fingerprint};

/// Magnitude of a checkmate score.
pub const MATE_SCORE: f64 = 1000.0;

/// Subtracted when the position already recurs in the history.
pub const REPETITION_PENALTY: f64 = 100.0;

/// Occurrences in the history at which a position counts as repeated.
pub const REPETITION_THRESHOLD: usize = 2;

const OPPONENT_MATERIAL_WEIGHT: f64 = 1.5;
const KING_SAFETY_BONUS: f64 = 1.0;

/// Material values in pawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [f64; 6] = [1.0, 3.0, 3.0, 5.0, 9.0, 0.0];

/// Which side a search frame is scoring for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perspective {
    /// The agent's own frame (maximizing).
    Agent,
    /// The opponent's frame (minimizing).
    Opponent,
}

impl Perspective {
    pub fn flip(self) -> Self {
        match self {
            Perspective::Agent => Perspective::Opponent,
            Perspective::Opponent => Perspective::Agent,
        }
    }

    /// Side that moves in a frame with this perspective.
    pub fn mover(self, agent: Side) -> Side {
        match self {
            Perspective::Agent => agent,
            Perspective::Opponent => agent.other(),
        }
    }
}

/// Evaluates `board` for `agent`.
///
/// # Arguments
/// * `board` - Position to score
/// * `agent` - The side the searching agent plays
/// * `history` - Fingerprints used for the repetition penalty
/// * `perspective` - Frame doing the scoring; selects material weight and
///   the sign of the king terms
pub fn evaluate<B: GameBoard>(
    board: &B,
    agent: Side,
    history: &[u64],
    perspective: Perspective,
) -> f64 {
    if board.is_in_checkmate(agent) {
        return -MATE_SCORE;
    }

    let mut score = 0.0;
    if board.is_in_checkmate(agent.other()) {
        score += MATE_SCORE;
    }

    let key = fingerprint(board);
    if history.iter().filter(|&&k| k == key).count() >= REPETITION_THRESHOLD {
        score -= REPETITION_PENALTY;
    }

    let (weight, king_bonus) = match perspective {
        Perspective::Agent => (1.0, KING_SAFETY_BONUS),
        Perspective::Opponent => (-OPPONENT_MATERIAL_WEIGHT, -KING_SAFETY_BONUS),
    };

    for placement in board.placements() {
        score += weight * piece_value(placement.kind);

        if placement.kind == PieceKind::King {
            let king = KingView::new(placement.pos, placement.side, board);
            if king.can_castle() {
                score += king_bonus;
            }
            // Corner kings count as sheltered.
            if king.pos().is_corner() {
                score += king_bonus;
            }
        }
    }

    score
}

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> f64 {
    PIECE_VALUES[kind.idx()]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
