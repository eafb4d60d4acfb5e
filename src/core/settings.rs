//! User preferences
//!
//! Everything here is plain data; loading and saving lives in
//! [`settings_persistence`](super::settings_persistence).

use serde::{Deserialize, Serialize};

/// Settings that can be changed from the command line or `settings.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Whether selecting a piece highlights its legal destinations
    pub show_hints: bool,

    /// Whether the squares of the last move are marked on the board
    pub highlight_last_move: bool,

    /// Characters used to draw the board
    pub glyphs: GlyphSet,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            show_hints: true,
            highlight_last_move: true,
            glyphs: GlyphSet::Ascii,
        }
    }
}

/// Character sets for the terminal board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Ascii,
    Unicode,
}

/// The characters a [`GlyphSet`] resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub white: char,
    pub black: char,
    pub dark: char,
    pub light: char,
    pub hint: char,
    pub last_move: char,
}

impl GlyphSet {
    pub fn glyphs(self) -> Glyphs {
        match self {
            GlyphSet::Ascii => Glyphs {
                white: 'w',
                black: 'b',
                dark: '.',
                light: ' ',
                hint: '*',
                last_move: '+',
            },
            GlyphSet::Unicode => Glyphs {
                white: '⛀',
                black: '⛂',
                dark: '·',
                light: ' ',
                hint: '◦',
                last_move: '▫',
            },
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GlyphSet::Ascii => "ASCII (w / b)",
            GlyphSet::Unicode => "Unicode draughts men",
        }
    }
}
