//! Checkers move legality
//!
//! Decides whether a single diagonal step or capture jump is legal, lists the
//! legal destinations from a square, and provides a simple 8x8 board to run
//! those queries against.
//!
//! ```
//! use checkers_rules::{possible_destinations, CheckerBoard, Coord};
//!
//! let board = CheckerBoard::setup_position();
//! let hints = possible_destinations(&board, Coord::new(1, 2));
//! assert_eq!(hints, vec![Coord::new(2, 3), Coord::new(0, 3)]);
//! ```

pub mod board;
pub mod error;
pub mod rules;
pub mod types;

pub use board::{BoardMut, BoardQuery, CheckerBoard};
pub use error::{RulesError, RulesResult};
pub use rules::{possible_destinations, possible_moves, IllegalMove, Move, MoveKind};
pub use types::{Coord, PieceColor, BOARD_SIZE};
