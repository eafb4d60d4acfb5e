//! Move hint boundary
//!
//! The session never draws anything itself. It tells a [`HintRenderer`] which
//! squares to highlight and when to clear them; the front end decides what a
//! highlight looks like.

use checkers_rules::Coord;

/// Receiver of highlight requests from the game session
pub trait HintRenderer {
    /// Mark `at` as a legal destination
    fn highlight_tile(&mut self, at: Coord);

    /// Remove every highlight
    fn clear_highlights(&mut self);
}

/// Renderer that ignores every request, for sessions without a display
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl HintRenderer for NoopRenderer {
    fn highlight_tile(&mut self, _at: Coord) {}

    fn clear_highlights(&mut self) {}
}
