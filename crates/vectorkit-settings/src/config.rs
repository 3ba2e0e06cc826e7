//! Configuration management for VectorKit
//!
//! Provides configuration file handling and validation for the editing
//! engine. Supports JSON and TOML file formats stored in the platform
//! config directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas defaults (frame size, minimum frame size, background)
//! - Interaction tuning (drop zones, keyboard double taps, hit tolerance)
//! - Geometry approximation used by boolean compounds
//! - History limits

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vectorkit_core::constants;

/// Canvas and frame defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Width of a newly created frame
    pub default_frame_width: f64,
    /// Height of a newly created frame
    pub default_frame_height: f64,
    /// Frames can never be resized below this width or height
    pub min_frame_size: f64,
    /// Document background color (`#rrggbb`)
    pub background_color: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            default_frame_width: 800.0,
            default_frame_height: 600.0,
            min_frame_size: constants::MIN_FRAME_SIZE,
            background_color: constants::DEFAULT_BACKGROUND.to_string(),
        }
    }
}

/// Pointer and keyboard interaction tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Fraction of a container row that keeps before/after semantics
    pub drop_zone_split: f64,
    /// Window for the `0` `0` opacity shortcut, in milliseconds
    pub opacity_double_tap_ms: u64,
    /// Extra slack around shapes when hit-testing clicks
    pub hit_tolerance: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            drop_zone_split: constants::DROP_ZONE_SPLIT,
            opacity_double_tap_ms: constants::OPACITY_DOUBLE_TAP_MS,
            hit_tolerance: 0.0,
        }
    }
}

/// Outline approximation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Segments used to approximate circles
    pub circle_segments: usize,
    /// Inner/outer radius ratio for new stars
    pub star_inner_ratio: f64,
    /// Results with a smaller area are treated as empty
    pub area_epsilon: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            circle_segments: constants::CIRCLE_SEGMENTS,
            star_inner_ratio: constants::STAR_INNER_RATIO,
            area_epsilon: constants::AREA_EPSILON,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undo steps kept. `None` keeps everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas defaults
    pub canvas: CanvasSettings,
    /// Interaction tuning
    pub interaction: InteractionSettings,
    /// Outline approximation
    pub geometry: GeometrySettings,
    /// Undo history
    pub history: HistorySettings,
}

/// Default location of the editor config file.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
    Ok(dir.join("vectorkit").join("config.toml"))
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::OutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl Config {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::Read { path: path.to_path_buf(), source })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnknownFormat { path: path.to_path_buf() }.into());
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(ConfigError::UnknownFormat { path: path.to_path_buf() }.into());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| SettingsError::Write { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(path, content)
            .map_err(|source| SettingsError::Write { path: path.to_path_buf(), source })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = &self.canvas;
        if !(canvas.min_frame_size.is_finite() && canvas.min_frame_size > 0.0) {
            return Err(out_of_range(
                "canvas.min_frame_size",
                canvas.min_frame_size,
            ));
        }
        if canvas.default_frame_width < canvas.min_frame_size {
            return Err(out_of_range(
                "canvas.default_frame_width",
                canvas.default_frame_width,
            ));
        }
        if canvas.default_frame_height < canvas.min_frame_size {
            return Err(out_of_range(
                "canvas.default_frame_height",
                canvas.default_frame_height,
            ));
        }
        if vectorkit_core::hex_to_hsb(&canvas.background_color).is_err() {
            return Err(out_of_range(
                "canvas.background_color",
                &canvas.background_color,
            ));
        }

        let split = self.interaction.drop_zone_split;
        if !(split > 0.0 && split < 1.0) {
            return Err(out_of_range("interaction.drop_zone_split", split));
        }
        if self.interaction.hit_tolerance < 0.0 {
            return Err(out_of_range(
                "interaction.hit_tolerance",
                self.interaction.hit_tolerance,
            ));
        }

        if self.geometry.circle_segments < 3 {
            return Err(out_of_range(
                "geometry.circle_segments",
                self.geometry.circle_segments,
            ));
        }
        let ratio = self.geometry.star_inner_ratio;
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(out_of_range("geometry.star_inner_ratio", ratio));
        }
        if self.geometry.area_epsilon < 0.0 {
            return Err(out_of_range(
                "geometry.area_epsilon",
                self.geometry.area_epsilon,
            ));
        }

        if self.history.max_depth == Some(0) {
            return Err(out_of_range("history.max_depth", 0));
        }

        Ok(())
    }
}
