//! Optional `settings.ron` next to the executable, for window tweaks
//! without a rebuild. Missing or malformed files fall back to defaults
//! with a warning.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub window_width: f32,
    pub window_height: f32,
    pub vsync: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            window_width: crate::shared::SCREEN_WIDTH,
            window_height: crate::shared::SCREEN_HEIGHT,
            vsync: true,
        }
    }
}

fn settings_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("settings.ron")
}

/// Load settings, or defaults when the file is absent or unreadable.
/// Called before the App is built, so plain eprintln is the only logger.
pub fn load_settings() -> GameSettings {
    let path = settings_path();
    match fs::read_to_string(&path) {
        Ok(contents) => match ron::from_str(&contents) {
            Ok(settings) => settings,
            Err(error) => {
                eprintln!(
                    "settings: could not parse {:?} ({}); using defaults",
                    path, error
                );
                GameSettings::default()
            }
        },
        Err(_) => GameSettings::default(),
    }
}
