use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }
}

/// Board square as `(x, y)`: `x` is the file (0 = a), `y` the rank (0 = rank 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Index into a 64-entry table, `None` when off the board.
    pub fn index(self) -> Option<usize> {
        if self.x < 8 && self.y < 8 {
            Some(self.y as usize * 8 + self.x as usize)
        } else {
            None
        }
    }

    pub fn is_corner(self) -> bool {
        matches!((self.x, self.y), (0, 0) | (0, 7) | (7, 0) | (7, 7))
    }

    pub fn is_center(self) -> bool {
        (3..=4).contains(&self.x) && (3..=4).contains(&self.y)
    }

    /// Parses algebraic coordinates such as `e4`.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Self::new(f - b'a', r - b'1'))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Off-board coordinates have no algebraic name.
        if self.index().is_none() {
            return write!(f, "({}, {})", self.x, self.y);
        }
        let file = (b'a' + self.x) as char;
        let rank = (b'1' + self.y) as char;
        write!(f, "{file}{rank}")
    }
}

/// One ply: origin and destination square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// An occupied square as seen by the search: what stands where, and whose it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub kind: PieceKind,
    pub side: Side,
    pub pos: Coord,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
