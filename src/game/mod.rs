//! Checkers game module - session state on top of the pure rules
//!
//! Separates the pure legality logic (`checkers_rules`) from the mutable game
//! session that owns the board.
//!
//! # Module Organization
//!
//! - `session` - [`Game`]: hints, player moves, the opening setup
//! - `selection` - the selected piece and its legal destinations
//! - `error` - why a player move was refused

pub mod error;
pub mod selection;
pub mod session;

pub use error::{GameError, GameResult};
pub use selection::Selection;
pub use session::Game;
