//! Persistence collaborators.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::serialization::{DocumentFile, DocumentSnapshot};

/// Stores and retrieves documents by id.
pub trait DocumentPersistence {
    fn save(&mut self, document_id: &str, document: &DocumentSnapshot) -> Result<()>;

    /// `Ok(None)` when no document exists under `document_id`.
    fn load(&self, document_id: &str) -> Result<Option<DocumentSnapshot>>;
}

/// One JSON file per document under a directory.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    root: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, document_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", document_id))
    }
}

impl DocumentPersistence for JsonFilePersistence {
    fn save(&mut self, document_id: &str, document: &DocumentSnapshot) -> Result<()> {
        std::fs::create_dir_all(&self.root).with_context(|| {
            format!("Failed to create document directory {}", self.root.display())
        })?;
        let path = self.path_for(document_id);
        let mut file = DocumentFile::from_snapshot(document);
        if path.exists() {
            if let Ok(previous) = DocumentFile::load_from_file(&path) {
                file.carry_created(&previous);
            }
        }
        file.save_to_file(&path)?;
        info!(path = %path.display(), shapes = document.shapes.len(), "document saved");
        Ok(())
    }

    fn load(&self, document_id: &str) -> Result<Option<DocumentSnapshot>> {
        let path = self.path_for(document_id);
        if !path.exists() {
            debug!(path = %path.display(), "no document on disk");
            return Ok(None);
        }
        let file = DocumentFile::load_from_file(&path)
            .with_context(|| format!("Failed to load document {}", document_id))?;
        Ok(Some(file.into_snapshot()))
    }
}

/// Keeps serialized documents in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    documents: HashMap<String, String>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Stores raw JSON, e.g. a file written by another version.
    pub fn insert_raw(&mut self, document_id: impl Into<String>, json: impl Into<String>) {
        self.documents.insert(document_id.into(), json.into());
    }
}

impl DocumentPersistence for MemoryPersistence {
    fn save(&mut self, document_id: &str, document: &DocumentSnapshot) -> Result<()> {
        let json = DocumentFile::from_snapshot(document).to_json()?;
        self.documents.insert(document_id.to_string(), json);
        Ok(())
    }

    fn load(&self, document_id: &str) -> Result<Option<DocumentSnapshot>> {
        self.documents
            .get(document_id)
            .map(|json| DocumentFile::from_json(json).map(DocumentFile::into_snapshot))
            .transpose()
    }
}
