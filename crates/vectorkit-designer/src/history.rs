//! Snapshot undo/redo.
//!
//! Every committed edit pushes the previous shape map onto the undo stack
//! and installs the new one. Snapshots are immutable `Arc`s, so nothing
//! that later edits a draft can reach into history.

use std::sync::Arc;

use tracing::debug;

use crate::document::DocumentStore;
use crate::model::ShapeMap;

#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Arc<ShapeMap>>,
    redo_stack: Vec<Arc<ShapeMap>>,
    max_depth: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that drops the oldest snapshot beyond `max_depth` entries.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Records the store's current state and installs `next`. Clears redo.
    pub fn commit(&mut self, store: &mut DocumentStore, next: ShapeMap) {
        self.undo_stack.push(store.snapshot());
        self.redo_stack.clear();
        if let Some(max) = self.max_depth {
            if self.undo_stack.len() > max {
                let excess = self.undo_stack.len() - max;
                self.undo_stack.drain(..excess);
            }
        }
        store.replace(Arc::new(next));
        debug!(depth = self.undo_stack.len(), "committed snapshot");
    }

    /// Restores the previous snapshot. Returns false with nothing to undo.
    pub fn undo(&mut self, store: &mut DocumentStore) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(store.snapshot());
        store.replace(previous);
        true
    }

    pub fn redo(&mut self, store: &mut DocumentStore) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(store.snapshot());
        store.replace(next);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
