//! Error types for game module
//!
//! [`Game::try_player_move`](super::Game::try_player_move) only reports
//! success or failure; [`Game::play_move`](super::Game::play_move) uses these
//! to say why a move was refused.

use checkers_rules::{Coord, IllegalMove, RulesError};
use thiserror::Error;

/// Reasons a player move was not applied
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Piece not found at the origin square
    #[error("No piece at {at}")]
    PieceNotFound { at: Coord },

    /// The move breaks a rule
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] IllegalMove),

    /// The board refused a move that had already been validated
    #[error("Board rejected the move: {0}")]
    Board(#[from] RulesError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
