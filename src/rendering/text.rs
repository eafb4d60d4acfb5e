//! Terminal board rendering
//!
//! Draws the board as a character grid with rank numbers on the left and file
//! numbers underneath, rank 7 at the top. Highlighted squares show the hint
//! glyph; squares of the last move show the last-move glyph when they are
//! empty.

use std::collections::BTreeSet;

use checkers_rules::{BoardQuery, CheckerBoard, Coord, Move, PieceColor, BOARD_SIZE};

use super::hints::HintRenderer;
use crate::core::{GameSettings, Glyphs};

/// [`HintRenderer`] that remembers highlights and draws them as text
#[derive(Debug, Clone)]
pub struct TextRenderer {
    glyphs: Glyphs,
    highlight_last_move: bool,
    highlighted: BTreeSet<Coord>,
}

impl TextRenderer {
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            glyphs: settings.glyphs.glyphs(),
            highlight_last_move: settings.highlight_last_move,
            highlighted: BTreeSet::new(),
        }
    }

    /// Currently highlighted squares
    pub fn highlighted(&self) -> impl Iterator<Item = Coord> + '_ {
        self.highlighted.iter().copied()
    }

    pub fn is_highlighted(&self, at: Coord) -> bool {
        self.highlighted.contains(&at)
    }

    /// Draw the board, one line per rank
    pub fn render(&self, board: &CheckerBoard, last_move: Option<&Move>) -> String {
        let last_squares: Vec<Coord> = match last_move {
            Some(mv) if self.highlight_last_move => vec![mv.start, mv.end],
            _ => Vec::new(),
        };

        let mut out = String::new();
        for y in (0..BOARD_SIZE).rev() {
            out.push_str(&format!("{y} "));
            for x in 0..BOARD_SIZE {
                let at = Coord::new(x, y);
                let glyph = match board.color_at(at) {
                    Some(PieceColor::White) => self.glyphs.white,
                    Some(PieceColor::Black) => self.glyphs.black,
                    None if self.highlighted.contains(&at) => self.glyphs.hint,
                    None if last_squares.contains(&at) => self.glyphs.last_move,
                    None if at.is_dark() => self.glyphs.dark,
                    None => self.glyphs.light,
                };
                out.push(' ');
                out.push(glyph);
            }
            out.push('\n');
        }

        out.push_str("  ");
        for x in 0..BOARD_SIZE {
            out.push_str(&format!(" {x}"));
        }
        out.push('\n');
        out
    }
}

impl HintRenderer for TextRenderer {
    fn highlight_tile(&mut self, at: Coord) {
        self.highlighted.insert(at);
    }

    fn clear_highlights(&mut self) {
        self.highlighted.clear();
    }
}
