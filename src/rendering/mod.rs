//! Rendering module - what the player sees
//!
//! - `hints` - the [`HintRenderer`] boundary the game session talks to
//! - `text` - [`TextRenderer`], a terminal board that also keeps hint state

pub mod hints;
pub mod text;

pub use hints::{HintRenderer, NoopRenderer};
pub use text::TextRenderer;
