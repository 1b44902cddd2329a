//! Presentation settings loaded from `config/default.toml`.
//!
//! Only the window is configurable. The demo scenario (grid, obstacles,
//! start, goal) and the 300 ms animation tick stay compiled-in constants.

use config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Window presentation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub high_dpi: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Gridway - Grid Pathfinding Demo".to_string(),
            width: 760,
            height: 880,
            high_dpi: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
}

/// Loads settings, falling back to the compiled-in defaults when the file
/// is missing or malformed.
pub fn load_settings() -> Settings {
    let built = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false))
        .build();

    match built.and_then(|c| c.try_deserialize::<Settings>()) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load {DEFAULT_CONFIG_PATH}, using defaults: {e}");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let settings = Settings::default();
        assert!(settings.window.width > 0);
        assert!(settings.window.height > 0);
        assert!(!settings.window.title.is_empty());
    }
}
