//! Zobrist fingerprints of piece placement.
//!
//! A fingerprint is the XOR of one random key per occupied square, keyed by
//! (piece kind, square, side). It covers placement only: side to move,
//! castling rights and move history are deliberately left out, so the value
//! identifies a recurring *arrangement* of pieces. That is all the repetition
//! penalty in the search needs.
//!
//! XOR is commutative and associative, so the visiting order of squares never
//! changes the result. Collisions are possible and tolerated.

use std::sync::LazyLock;

use rand::Rng;

use crate::board::GameBoard;
use crate::types::{Coord, PieceKind, Placement, Side};

/// Random keys for every (side, piece kind, square) triple.
pub struct ZobristKeys {
    /// Indexed by [side][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
}

impl ZobristKeys {
    /// Draws every key uniformly from the nonzero 64-bit values.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pieces = [[[0u64; 64]; 6]; 2];
        for side in pieces.iter_mut() {
            for kind in side.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen_range(1..=u64::MAX);
                }
            }
        }
        Self { pieces }
    }

    /// Get the key for `kind` of `side` standing on `pos`.
    ///
    /// Off-board coordinates contribute nothing.
    #[inline(always)]
    pub fn piece_key(&self, kind: PieceKind, pos: Coord, side: Side) -> u64 {
        match pos.index() {
            Some(sq) => self.pieces[side.idx()][kind.idx()][sq],
            None => 0,
        }
    }

    pub fn hash_placements<I>(&self, placements: I) -> u64
    where
        I: IntoIterator<Item = Placement>,
    {
        placements
            .into_iter()
            .fold(0, |acc, p| acc ^ self.piece_key(p.kind, p.pos, p.side))
    }
}

/// Process-wide key table, drawn on first use and immutable afterwards.
pub static ZOBRIST: LazyLock<ZobristKeys> =
    LazyLock::new(|| ZobristKeys::from_rng(&mut rand::thread_rng()));

/// Fingerprint of the current piece placement on `board`.
pub fn fingerprint<B: GameBoard>(board: &B) -> u64 {
    ZOBRIST.hash_placements(board.placements())
}

/// Fingerprint of an arbitrary placement sequence.
pub fn fingerprint_placements<I>(placements: I) -> u64
where
    I: IntoIterator<Item = Placement>,
{
    ZOBRIST.hash_placements(placements)
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
