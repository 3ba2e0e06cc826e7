//! Errors raised while reading, writing or checking the editor config.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// The platform reports no per-user config directory.
    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config cannot be written as TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// The file parsed but its contents were rejected.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Problems with the config contents or its file name.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Only `.json` and `.toml` are understood.
    #[error("{} is neither .json nor .toml", path.display())]
    UnknownFormat { path: PathBuf },

    #[error("{key} = {value} is not allowed")]
    OutOfRange { key: String, value: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
