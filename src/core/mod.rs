//! Core module - settings and their persistence
//!
//! - [`GameSettings`] - user preferences (hints, last-move marker, glyphs)
//! - [`settings_persistence`] - JSON load/save in the platform config directory
//! - [`CoreError`] - failures while reading or writing settings

pub mod error;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings::{GameSettings, GlyphSet, Glyphs};
pub use settings_persistence::{default_settings_path, load_settings, save_settings};
