//! XFCheckers - checkers move legality with hints and a terminal board
//!
//! The rules themselves live in the `checkers_rules` crate. This crate adds
//! the game session that owns a board, the hint rendering boundary, user
//! settings and terminal input.

pub mod core;
pub mod game;
pub mod input;
pub mod rendering;

pub use checkers_rules as rules;
