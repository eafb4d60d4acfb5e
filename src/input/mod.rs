//! Input module - terminal commands
//!
//! - `command` - parsing a line into a [`Command`]
//! - `handler` - applying a command to a [`Game`](crate::game::Game)
//!
//! The handler takes the session as a parameter; nothing in here holds on to
//! it.

pub mod command;
pub mod handler;

pub use command::{Command, InputError, InputResult, HELP};
pub use handler::{handle_command, Response};
