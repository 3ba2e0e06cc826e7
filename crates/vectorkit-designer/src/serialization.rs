//! Serialization and deserialization for document files.
//!
//! Documents are stored as pretty-printed JSON carrying a format version
//! and creation/modification timestamps next to the shape map.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use vectorkit_core::constants::DEFAULT_BACKGROUND;

use crate::model::ShapeMap;

/// Document file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// What the editor hands to and gets back from persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub name: String,
    pub shapes: ShapeMap,
    pub background_color: String,
}

impl Default for DocumentSnapshot {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            shapes: ShapeMap::new(),
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

/// Complete document file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    /// Empty when the file predates versioning.
    #[serde(default)]
    pub version: String,
    pub metadata: DocumentMetadata,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default)]
    pub shapes: ShapeMap,
}

/// Document metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

impl DocumentFile {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DocumentMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            background_color: default_background(),
            shapes: ShapeMap::new(),
        }
    }

    pub fn from_snapshot(snapshot: &DocumentSnapshot) -> Self {
        let mut file = Self::new(&snapshot.name);
        file.background_color = snapshot.background_color.clone();
        file.shapes = snapshot.shapes.clone();
        file
    }

    pub fn into_snapshot(self) -> DocumentSnapshot {
        DocumentSnapshot {
            name: self.metadata.name,
            shapes: self.shapes,
            background_color: self.background_color,
        }
    }

    /// Keeps the original creation time when saving over an older file.
    pub fn carry_created(&mut self, previous: &DocumentFile) {
        self.metadata.created = previous.metadata.created;
    }

    /// Whether this file was written by the current format version.
    pub fn is_current_version(&self) -> bool {
        self.version == FILE_FORMAT_VERSION
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize document")
    }

    /// Parses a document. Files from another format version load as-is
    /// with a warning.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: DocumentFile =
            serde_json::from_str(content).context("Failed to parse document file")?;
        if !file.is_current_version() {
            warn!(
                found = %file.version,
                expected = FILE_FORMAT_VERSION,
                "document format version differs, loading without migration"
            );
        }
        Ok(file)
    }

    /// Save document to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).context("Failed to write document file")?;
        Ok(())
    }

    /// Load document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read document file")?;
        Self::from_json(&content)
    }
}
