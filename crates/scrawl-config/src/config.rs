/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::palette;

/// Top-level application configuration.
///
/// Covers UI defaults only (fonts, colors, window size). Note content and
/// edit history are deliberately never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Font size the note field starts with, in points.
    pub font_size: f32,
    /// Lower bound for the `A-` stepper.
    pub min_font_size: f32,
    /// Upper bound for the `A+` stepper.
    pub max_font_size: f32,
    /// Step applied by the size buttons.
    pub font_step: f32,
    /// Text color the note field starts with.
    pub default_color: HexColor,
    /// Whether to use the dark UI style.
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            min_font_size: 8.0,
            max_font_size: 72.0,
            font_step: 2.0,
            default_color: palette::BLACK.color,
            dark_mode: true,
            window_width: 900.0,
            window_height: 640.0,
        }
    }
}

impl AppConfig {
    /// Returns the config file path: exe directory + `scrawl.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("scrawl.json")))
            .unwrap_or_else(|| PathBuf::from("scrawl.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps out-of-range values to something usable.
    pub fn sanitize(&mut self) {
        if !self.min_font_size.is_finite() || self.min_font_size < 1.0 {
            self.min_font_size = 8.0;
        }
        if !self.max_font_size.is_finite() || self.max_font_size < self.min_font_size {
            self.max_font_size = self.min_font_size.max(72.0);
        }
        if !self.font_step.is_finite() || self.font_step <= 0.0 {
            self.font_step = 2.0;
        }
        if !self.font_size.is_finite() {
            self.font_size = 18.0;
        }
        self.font_size = self.font_size.clamp(self.min_font_size, self.max_font_size);

        if !self.window_width.is_finite() || self.window_width < 320.0 {
            self.window_width = 900.0;
        }
        if !self.window_height.is_finite() || self.window_height < 240.0 {
            self.window_height = 640.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_policy() {
        let config = AppConfig::default();
        assert_eq!(config.font_size, 18.0);
        assert_eq!(config.min_font_size, 8.0);
        assert_eq!(config.font_step, 2.0);
        assert_eq!(config.default_color, palette::BLACK.color);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scrawl.json");

        let config = AppConfig::load_or_create(&path);
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_or_create_keeps_broken_file_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scrawl.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = AppConfig::load_or_create(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scrawl.json");

        let mut config = AppConfig::default();
        config.font_size = 24.0;
        config.default_color = palette::PURPLE.color;
        config.dark_mode = false;
        config.save(&path).unwrap();

        let loaded = AppConfig::load_or_create(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_sanitize_clamps_nonsense() {
        let mut config = AppConfig {
            font_size: 500.0,
            min_font_size: -3.0,
            max_font_size: 0.5,
            font_step: 0.0,
            window_width: 10.0,
            window_height: f32::NAN,
            ..AppConfig::default()
        };
        config.sanitize();

        assert_eq!(config.min_font_size, 8.0);
        assert_eq!(config.max_font_size, 72.0);
        assert_eq!(config.font_step, 2.0);
        assert_eq!(config.font_size, 72.0);
        assert_eq!(config.window_width, 900.0);
        assert_eq!(config.window_height, 640.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r##"{"font_size": 30.0}"##).unwrap();
        assert_eq!(config.font_size, 30.0);
        assert_eq!(config.min_font_size, 8.0);
        assert!(config.dark_mode);
    }
}
