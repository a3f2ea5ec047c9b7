pub mod board;
pub mod types;
pub mod zobrist;

// Re-export core game types (not engine-specific)
pub use board::*;
pub use types::*;
pub use zobrist::{ZOBRIST, ZobristKeys, fingerprint, fingerprint_placements};

// =============================================================================
// Agent trait: implemented by every move-selecting player (minimax, random)
// =============================================================================

/// Trait that all chess agents must implement.
///
/// The match harness drives agents only through this trait, so a search
/// agent and a baseline can sit on either side of the board.
pub trait Agent: Send {
    /// Pick a move for this agent's side in `board`.
    ///
    /// # Returns
    /// The chosen move, or `None` when no move can be selected (checkmate,
    /// stalemate, or no legal continuation found). The caller decides what
    /// that means for the game.
    fn choose_action(&mut self, board: &Board) -> Option<Move>;

    /// The side this agent plays.
    fn side(&self) -> Side;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear histories, counters, etc.)
    fn new_game(&mut self) {}
}
