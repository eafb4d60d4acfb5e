//! Checkers rules module - Pure move legality without UI coupling
//!
//! Everything here is a pure function of a move and a [`BoardQuery`]. Illegal
//! moves are a normal negative answer (`false`, or absence from the
//! enumeration), never an error.
//!
//! # Module Structure
//!
//! - `move_validator` - [`Move`] and the legality predicate
//! - `move_enumerator` - the eight fixed candidates filtered through the predicate
//!
//! Only single moves are modelled: no forced captures, no multi-jump
//! continuation, no kings.
//!
//! [`BoardQuery`]: crate::board::BoardQuery

pub mod move_enumerator;
pub mod move_validator;

#[cfg(test)]
mod tests;

pub use move_enumerator::{possible_destinations, possible_moves, CANDIDATE_OFFSETS};
pub use move_validator::{IllegalMove, Move, MoveKind};
