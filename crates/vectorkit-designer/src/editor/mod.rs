//! Editor state management.
//!
//! `Editor` ties the document store, history, selection and the editing
//! engines together. Split into submodules:
//! - `shapes`: creation, deletion and property edits
//! - `structure`: hierarchy moves and panel drag/drop
//! - `boolean`: compound combine, expand and ungroup
//! - `selection`: clicks, marquee and keyboard opacity
//! - `artboard`: frame move/resize gestures
//! - `file_io`: load and save through a persistence collaborator

mod artboard;
mod boolean;
mod file_io;
mod selection;
mod shapes;
mod structure;

use tracing::{debug, warn};
use vectorkit_core::{EditError, EditResult};
use vectorkit_settings::Config;

use crate::artboard::ArtboardDrag;
use crate::boolean::Outliner;
use crate::document::DocumentStore;
use crate::drag_drop::DragSession;
use crate::factory::ShapeFactory;
use crate::history::History;
use crate::interaction::InteractionSession;
use crate::model::{ShapeId, ShapeMap};
use crate::render::RenderSink;
use crate::selection::{Selection, SelectionManager};

/// Document editing state for one open document.
pub struct Editor {
    pub(crate) store: DocumentStore,
    pub(crate) history: History,
    pub(crate) selection: SelectionManager,
    pub(crate) factory: ShapeFactory,
    pub(crate) outliner: Outliner,
    pub(crate) config: Config,
    pub(crate) interaction: InteractionSession,
    pub(crate) drag: Option<DragSession>,
    pub(crate) artboard_drag: Option<ArtboardDrag>,
    pub(crate) active_frame: Option<ShapeId>,
    sinks: Vec<Box<dyn RenderSink>>,
    pub document_id: String,
    pub name: String,
    pub background_color: String,
    pub is_modified: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Editor {
    /// Creates an empty document.
    pub fn new(config: Config) -> Self {
        Self {
            store: DocumentStore::new(),
            history: History::with_max_depth(config.history.max_depth),
            selection: SelectionManager::new(),
            factory: ShapeFactory::new(&config),
            outliner: Outliner::from_settings(&config.geometry),
            interaction: InteractionSession::new(config.interaction.opacity_double_tap_ms),
            drag: None,
            artboard_drag: None,
            active_frame: None,
            sinks: Vec::new(),
            document_id: uuid::Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            background_color: config.canvas.background_color.clone(),
            is_modified: false,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// The map to render: the live working copy while a frame drag is in
    /// flight, the committed snapshot otherwise.
    pub fn shapes(&self) -> &ShapeMap {
        match &self.artboard_drag {
            Some(drag) => drag.working(),
            None => self.store.shapes(),
        }
    }

    pub fn selection(&self) -> &Selection {
        self.selection.selection()
    }

    pub fn active_frame(&self) -> Option<&str> {
        self.active_frame.as_deref()
    }

    pub fn outliner(&self) -> &Outliner {
        &self.outliner
    }

    /// Registers a sink and hands it the current document.
    pub fn add_render_sink(&mut self, mut sink: Box<dyn RenderSink>) {
        sink.document_changed(self.store.shapes());
        self.sinks.push(sink);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo the last committed edit. Ignored while a gesture is in flight.
    pub fn undo(&mut self) -> bool {
        if self.gesture_in_flight() {
            return false;
        }
        let undone = self.history.undo(&mut self.store);
        if undone {
            self.after_change();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        if self.gesture_in_flight() {
            return false;
        }
        let redone = self.history.redo(&mut self.store);
        if redone {
            self.after_change();
        }
        redone
    }

    fn gesture_in_flight(&self) -> bool {
        self.artboard_drag.is_some()
    }

    /// Runs `edit` on a draft and commits it if it succeeds.
    ///
    /// Failed edits leave the store untouched. Geometry failures log at
    /// warn, everything else at debug.
    pub(crate) fn apply<T, F>(&mut self, label: &str, edit: F) -> EditResult<T>
    where
        F: FnOnce(&mut ShapeMap, &mut ShapeFactory, &Outliner) -> EditResult<T>,
    {
        if self.gesture_in_flight() {
            return Err(EditError::invalid("a frame drag is in progress"));
        }
        let mut draft = self.store.draft();
        match edit(&mut draft, &mut self.factory, &self.outliner) {
            Ok(value) => {
                self.history.commit(&mut self.store, draft);
                debug!(operation = label, "edit committed");
                self.after_change();
                Ok(value)
            }
            Err(err) => {
                if err.is_geometry_failure() {
                    warn!(operation = label, error = %err, "edit aborted");
                } else {
                    debug!(operation = label, error = %err, "edit rejected");
                }
                Err(err)
            }
        }
    }

    /// Commits a map built outside `apply`.
    pub(crate) fn commit_map(&mut self, next: ShapeMap) {
        self.history.commit(&mut self.store, next);
        self.after_change();
    }

    pub(crate) fn after_change(&mut self) {
        let shapes = self.store.shapes();
        self.selection.retain_existing(shapes);
        if let Some(frame) = &self.active_frame {
            if !shapes.contains_key(frame) {
                self.active_frame = None;
            }
        }
        if let Some(drag) = &self.drag {
            if !shapes.contains_key(drag.active()) {
                self.drag = None;
            }
        }
        self.is_modified = true;
        self.notify();
    }

    /// Sends [`shapes`](Editor::shapes) to every sink.
    pub(crate) fn notify(&mut self) {
        let mut sinks = std::mem::take(&mut self.sinks);
        for sink in &mut sinks {
            sink.document_changed(self.shapes());
        }
        self.sinks = sinks;
    }
}
