use serde::{Deserialize, Serialize};

use crate::kernel::recent::DEFAULT_RECENT_CAPACITY;
use crate::models::font::{DEFAULT_FONT_FAMILIES, DEFAULT_FONT_SIZE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,
    #[serde(default)]
    pub font: FontSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSettings {
    #[serde(default = "default_families")]
    pub families: Vec<String>,
    #[serde(default = "default_size")]
    pub size: u16,
}

fn default_recent_capacity() -> usize {
    DEFAULT_RECENT_CAPACITY
}

fn default_families() -> Vec<String> {
    DEFAULT_FONT_FAMILIES.iter().map(|s| s.to_string()).collect()
}

fn default_size() -> u16 {
    DEFAULT_FONT_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recent_capacity: default_recent_capacity(),
            font: FontSettings::default(),
        }
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            families: default_families(),
            size: default_size(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
