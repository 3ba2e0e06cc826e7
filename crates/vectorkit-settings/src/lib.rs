//! VectorKit Settings Crate
//!
//! Handles editor configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CanvasSettings, Config, GeometrySettings, HistorySettings,
    InteractionSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
