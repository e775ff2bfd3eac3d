use super::dirs::get_cache_dir;
use crate::kernel::services::ports::settings::Settings;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".quill";
const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Loads settings from the default location, falling back to defaults.
pub fn load_settings() -> Settings {
    match get_settings_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

pub fn load_settings_from(path: &Path) -> Settings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(_) => return Settings::default(),
    };
    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "malformed settings, using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
