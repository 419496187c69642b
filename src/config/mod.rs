//! Configuration file support for doodleboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/doodleboard/config.toml`. Settings cover the brush defaults and
//! the color picker palette.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::DrawingConfig;

use crate::input::state::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, clamp_brush_width};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// default_brush_width = 3
/// palette = ["black", "red", "#4299e1", [255, 128, 0]]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults and palette
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped or replaced and a warning is logged; a config
    /// file is never rejected for out-of-range values.
    ///
    /// Validated ranges:
    /// - `default_brush_width`: 1 - 20
    /// - `default_color`: must resolve to a color (falls back to black)
    /// - `palette`: invalid entries dropped; an empty palette restores the default
    fn validate_and_clamp(&mut self) {
        let width = self.drawing.default_brush_width;
        if !(MIN_BRUSH_WIDTH as i64..=MAX_BRUSH_WIDTH as i64).contains(&width) {
            warn!(
                "Invalid default_brush_width {}, clamping to {}-{} range",
                width, MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH
            );
            self.drawing.default_brush_width = clamp_brush_width(width) as i64;
        }

        if self.drawing.default_color.try_to_color().is_none() {
            warn!(
                "Invalid default_color {:?}, falling back to black",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("#000000".to_string());
        }

        let before = self.drawing.palette.len();
        self.drawing
            .palette
            .retain(|spec| spec.try_to_color().is_some());
        if self.drawing.palette.len() != before {
            warn!(
                "Dropped {} invalid palette entries",
                before - self.drawing.palette.len()
            );
        }
        if self.drawing.palette.is_empty() {
            warn!("Palette is empty, restoring the default swatches");
            self.drawing.palette = DrawingConfig::default().palette;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/doodleboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("doodleboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to `config_path` as TOML.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, DEFAULT_PALETTE, RED};
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.drawing.default_brush_width, 3);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.palette_colors(), DEFAULT_PALETTE.to_vec());
    }

    #[test]
    fn load_clamps_and_repairs_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r##"
[drawing]
default_color = "not-a-color"
default_brush_width = -5
palette = ["red", "#zzzzzz", [0, 0, 0]]
"##,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_brush_width, 1);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.palette_colors(), vec![RED, BLACK]);
    }

    #[test]
    fn empty_palette_restores_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing]\npalette = []\ndefault_brush_width = 999\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_brush_width, 20);
        assert_eq!(config.drawing.palette.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.drawing.default_brush_width = 12;
        config.drawing.default_color = ColorSpec::Rgb([229, 62, 62]);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.drawing.default_brush_width, 12);
        assert_eq!(loaded.drawing.default_color.to_color(), RED);
    }

    #[test]
    fn schema_names_drawing_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("default_brush_width"));
    }
}
