//! Type definitions for checkers game logic
//!
//! Coordinates are signed so that candidate moves which step off the board
//! can still be represented and rejected by the validator.

use std::fmt;
use std::ops::{Add, Sub};

/// Number of files (and ranks) on the board
pub const BOARD_SIZE: i32 = 8;

/// Board coordinate (x = file, y = rank), zero-indexed
///
/// Nothing is enforced at construction; bounds are the board's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate is one of the dark (playable) squares
    ///
    /// Uses bit parity rather than `%` so negative coordinates are classified
    /// with two's-complement semantics.
    pub fn is_dark(self) -> bool {
        (self.x & 1) == (!self.y & 1)
    }

    /// Cell halfway between `self` and `other`
    ///
    /// Only meaningful when both deltas are even.
    pub fn midpoint(self, other: Coord) -> Coord {
        let delta = other - self;
        Coord::new(self.x + delta.x / 2, self.y + delta.y / 2)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which player a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("White"),
            PieceColor::Black => f.write_str("Black"),
        }
    }
}
