//! Legality of a single candidate move
//!
//! A [`Move`] is a pure query object: it carries where a piece starts, where
//! it wants to go and which side is moving, and answers whether that is legal
//! against the current board. It never mutates anything.

use thiserror::Error;

use crate::board::BoardQuery;
use crate::types::{Coord, PieceColor};

/// A candidate transition from `start` to `end` for a piece of color `mover`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub start: Coord,
    pub end: Coord,
    pub mover: PieceColor,
}

/// What kind of legal move a [`Move`] turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// One diagonal step onto an empty square
    Step,
    /// Two diagonal steps over an opposing piece
    Jump { captured: Coord },
}

/// Why a move was rejected, in the order the rules are checked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("destination {0} is a light square")]
    LightSquare(Coord),

    #[error("destination {0} is off the board")]
    OutOfBounds(Coord),

    #[error("destination {0} is occupied")]
    Occupied(Coord),

    #[error("move is not diagonal")]
    NotDiagonal,

    #[error("no opposing piece to capture at {0}")]
    NoCapturablePiece(Coord),

    #[error("move spans {0} squares, at most 2 allowed")]
    TooFar(i64),
}

impl Move {
    pub fn new(start: Coord, end: Coord, mover: PieceColor) -> Self {
        Self { start, end, mover }
    }

    /// Check the move against the board, reporting the first rule it breaks
    ///
    /// The light-square test runs before the bounds test, so off-board
    /// destinations can be rejected for parity alone.
    pub fn check<B: BoardQuery + ?Sized>(&self, board: &B) -> Result<MoveKind, IllegalMove> {
        let end = self.end;

        if !end.is_dark() {
            return Err(IllegalMove::LightSquare(end));
        }
        if !board.in_bounds(end) {
            return Err(IllegalMove::OutOfBounds(end));
        }
        if !board.is_empty(end) {
            return Err(IllegalMove::Occupied(end));
        }

        // Widened so a start anywhere in i32 range cannot overflow
        let dx = (i64::from(end.x) - i64::from(self.start.x)).abs();
        let dy = (i64::from(end.y) - i64::from(self.start.y)).abs();
        if dx != dy {
            return Err(IllegalMove::NotDiagonal);
        }

        match dx {
            1 => Ok(MoveKind::Step),
            2 => {
                let over = self.start.midpoint(end);
                if board.color_at(over) == Some(self.mover.opposite()) {
                    Ok(MoveKind::Jump { captured: over })
                } else {
                    Err(IllegalMove::NoCapturablePiece(over))
                }
            }
            distance => Err(IllegalMove::TooFar(distance)),
        }
    }

    /// Whether the move is legal on this board
    pub fn is_valid<B: BoardQuery + ?Sized>(&self, board: &B) -> bool {
        self.check(board).is_ok()
    }
}
