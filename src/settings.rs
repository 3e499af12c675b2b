//! Game settings
//!
//! Loaded from a JSON file named by `SNAKE_SETTINGS`, defaults otherwise.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "SNAKE_SETTINGS";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("board {width}x{height} cannot hold the snake start at {x},{y}")]
    Board { width: u32, height: u32, x: i32, y: i32 },
}

/// Board and pacing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
    /// Cell size in pixels
    pub grid_gap: u32,
    /// Frames per tick at the start of each game
    pub base_tick_interval: u32,
    /// Fixed seed for reproducible runs; random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            grid_gap: GRID_GAP,
            base_tick_interval: BASE_TICK_INTERVAL,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `SNAKE_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Board size in cells
    pub fn board_size(&self) -> (u32, u32) {
        let gap = self.grid_gap.max(1);
        (self.viewport_width / gap, self.viewport_height / gap)
    }

    /// Frames per tick, floored at the fastest pace
    pub fn tick_interval(&self) -> u32 {
        self.base_tick_interval.max(MIN_TICK_INTERVAL)
    }

    /// Reject boards too small to hold the starting snake
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (width, height) = self.board_size();
        let (x, y) = SNAKE_START;
        if x as u32 >= width || y as u32 >= height {
            return Err(SettingsError::Board { width, height, x, y });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let settings = Settings::default();
        assert_eq!(settings.board_size(), (40, 30));
        assert_eq!(settings.tick_interval(), 4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "grid_gap": 40, "seed": 9 }"#).unwrap();
        assert_eq!(settings.board_size(), (20, 15));
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.base_tick_interval, BASE_TICK_INTERVAL);
    }

    #[test]
    fn test_zero_interval_floored() {
        let settings = Settings::from_json(r#"{ "base_tick_interval": 0 }"#).unwrap();
        assert_eq!(settings.tick_interval(), 1);
    }

    #[test]
    fn test_tiny_board_rejected() {
        let err = Settings::from_json(r#"{ "viewport_width": 80, "grid_gap": 20 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Board { width: 4, .. }));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(Settings::from_json("{"), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file("/nonexistent/snake-settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
