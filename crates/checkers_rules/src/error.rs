//! Error types for the rules crate
//!
//! Move illegality is not an error and never shows up here; see
//! [`crate::rules::IllegalMove`] for that. These cover malformed input to the
//! board itself.

use thiserror::Error;

use crate::types::Coord;

/// Errors that can occur while building or mutating a board
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinate outside the 8x8 grid
    #[error("Square {at} is off the board")]
    OffBoard { at: Coord },

    /// Tried to move from a square with no piece on it
    #[error("No piece at {at}")]
    NoPieceAt { at: Coord },

    /// Board diagram has the wrong number of ranks or files
    #[error("Board diagram must be 8x8, found {found} on line {line}")]
    DiagramShape { line: usize, found: usize },

    /// Board diagram contains a character that is not a piece or empty cell
    #[error("Unexpected character '{ch}' in board diagram on line {line}")]
    DiagramChar { line: usize, ch: char },
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
