//! Load and save through a persistence collaborator.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use super::Editor;
use crate::document::ShapeGraph;
use crate::persistence::DocumentPersistence;
use crate::serialization::DocumentSnapshot;

impl Editor {
    /// The document as persistence sees it.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            name: self.name.clone(),
            shapes: self.store.shapes().clone(),
            background_color: self.background_color.clone(),
        }
    }

    /// Save document under its id.
    pub fn save(&mut self, persistence: &mut dyn DocumentPersistence) -> Result<()> {
        persistence.save(&self.document_id, &self.snapshot())?;
        self.is_modified = false;
        Ok(())
    }

    /// Load document `document_id`, replacing the current one.
    ///
    /// Returns `Ok(false)` when no such document exists; the current
    /// document is left alone in that case.
    pub fn load(&mut self, persistence: &dyn DocumentPersistence, document_id: &str) -> Result<bool> {
        let Some(snapshot) = persistence.load(document_id)? else {
            return Ok(false);
        };
        self.open_snapshot(snapshot);
        self.document_id = document_id.to_string();
        Ok(true)
    }

    /// Replaces the whole document. History and selection start fresh.
    pub fn open_snapshot(&mut self, snapshot: DocumentSnapshot) {
        for violation in snapshot.shapes.violations() {
            warn!(%violation, "loaded document breaks an invariant");
        }
        if let Some(drag) = self.artboard_drag.take() {
            drag.cancel();
        }
        self.drag = None;
        self.factory.sync_with(&snapshot.shapes);
        info!(name = %snapshot.name, shapes = snapshot.shapes.len(), "document loaded");

        self.name = snapshot.name;
        self.background_color = snapshot.background_color;
        self.store.replace(Arc::new(snapshot.shapes));
        self.history.clear();
        self.selection.clear();
        self.interaction.reset();
        self.active_frame = None;
        self.is_modified = false;
        self.notify();
    }
}
