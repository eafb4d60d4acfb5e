//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file so preferences survive
//! between sessions.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/xfcheckers/settings.json` on Linux. Falls back to the working
//! directory if no config directory can be determined.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use super::error::{CoreError, CoreResult};
use super::settings::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
pub fn default_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "XFCheckers") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings, falling back to defaults if the file is missing or invalid
pub fn load_settings(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("[SETTINGS] {}. Using defaults.", e);
            GameSettings::default()
        }
    }
}

fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path).map_err(|source| CoreError::SettingsIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write settings as pretty JSON, creating the parent directory if needed
pub fn save_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    let io_err = |source: std::io::Error| CoreError::SettingsIo {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(io_err)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
