//! Board capability trait and the cozy-chess backed rules adapter.
//!
//! Search code never touches a concrete rules engine. It only sees
//! [`GameBoard`]: a placement walk, checkmate tests, candidate moves and move
//! application on an owned copy. [`Board`] implements it on top of
//! `cozy_chess`, which does legal move generation, check detection and FEN.

use std::fmt;

use cozy_chess::{Color, Piece, Square};
use thiserror::Error;

use crate::types::{Coord, Move, PieceKind, Placement, Side};

/// Errors raised while building a board.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },
}

/// What the search needs from a rules engine.
///
/// `Clone` is the headless copy: a clone carries placement, castling and
/// en-passant state and the side to move, and shares nothing with the
/// board it came from.
pub trait GameBoard: Clone {
    /// Every occupied square, in board order.
    fn placements(&self) -> Vec<Placement>;

    /// Side to move.
    fn turn(&self) -> Side;

    fn is_in_checkmate(&self, side: Side) -> bool;

    /// Candidate moves for `side`. May contain moves `handle_move` rejects.
    fn possible_moves(&self, side: Side) -> Vec<Move>;

    /// Applies `mv` in place. Returns `false` and leaves the board untouched
    /// when the move is rejected.
    fn handle_move(&mut self, mv: Move) -> bool;

    /// Whether `side` still holds any castling right.
    fn castling_available(&self, side: Side) -> bool;

    fn piece_count(&self, side: Side) -> usize {
        self.placements().iter().filter(|p| p.side == side).count()
    }
}

/// Transient view of one king, used to ask king-specific questions.
pub struct KingView<'a, B: GameBoard> {
    pos: Coord,
    side: Side,
    board: &'a B,
}

impl<'a, B: GameBoard> KingView<'a, B> {
    pub fn new(pos: Coord, side: Side, board: &'a B) -> Self {
        Self { pos, side, board }
    }

    pub fn pos(&self) -> Coord {
        self.pos
    }

    pub fn can_castle(&self) -> bool {
        self.board.castling_available(self.side)
    }
}

/// Chess position backed by `cozy_chess::Board`.
#[derive(Clone, Debug)]
pub struct Board {
    inner: cozy_chess::Board,
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn startpos() -> Self {
        Self {
            inner: cozy_chess::Board::default(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let inner =
            cozy_chess::Board::from_fen(fen, false).map_err(|e| BoardError::InvalidFen {
                fen: fen.to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok(Self { inner })
    }

    /// Piece standing on `pos`, if any.
    pub fn piece_at(&self, pos: Coord) -> Option<(PieceKind, Side)> {
        let sq = to_square(pos)?;
        let piece = self.inner.piece_on(sq)?;
        let color = self.inner.color_on(sq)?;
        Some((piece_kind(piece), side_of(color)))
    }

    fn has_legal_move(&self) -> bool {
        self.inner
            .generate_moves(|moves| moves.into_iter().next().is_some())
    }
}

impl GameBoard for Board {
    fn placements(&self) -> Vec<Placement> {
        let mut out = Vec::with_capacity(32);
        for sq in Square::ALL {
            if let (Some(piece), Some(color)) = (self.inner.piece_on(sq), self.inner.color_on(sq)) {
                out.push(Placement {
                    kind: piece_kind(piece),
                    side: side_of(color),
                    pos: coord_of(sq),
                });
            }
        }
        out
    }

    fn turn(&self) -> Side {
        side_of(self.inner.side_to_move())
    }

    fn is_in_checkmate(&self, side: Side) -> bool {
        // A side that is not to move cannot be in check in a legal position.
        side == self.turn() && !self.inner.checkers().is_empty() && !self.has_legal_move()
    }

    fn possible_moves(&self, side: Side) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        if side != self.turn() {
            return out;
        }
        self.inner.generate_moves(|moves| {
            for mv in moves {
                // Underpromotions collapse onto the queen promotion.
                if matches!(mv.promotion, None | Some(Piece::Queen)) {
                    out.push(Move::new(coord_of(mv.from), coord_of(mv.to)));
                }
            }
            false
        });
        out
    }

    fn handle_move(&mut self, mv: Move) -> bool {
        let (Some(from), Some(to)) = (to_square(mv.from), to_square(mv.to)) else {
            return false;
        };
        let mut chosen = None;
        self.inner.generate_moves(|moves| {
            for candidate in moves {
                if candidate.from == from
                    && candidate.to == to
                    && matches!(candidate.promotion, None | Some(Piece::Queen))
                {
                    chosen = Some(candidate);
                    return true;
                }
            }
            false
        });
        match chosen {
            Some(candidate) => {
                self.inner.play_unchecked(candidate);
                true
            }
            None => false,
        }
    }

    fn castling_available(&self, side: Side) -> bool {
        let rights = self.inner.castle_rights(color_of(side));
        rights.short.is_some() || rights.long.is_some()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

fn to_square(pos: Coord) -> Option<Square> {
    pos.index().map(Square::index)
}

fn coord_of(sq: Square) -> Coord {
    Coord::new(sq.file() as u8, sq.rank() as u8)
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn color_of(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}

fn piece_kind(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
