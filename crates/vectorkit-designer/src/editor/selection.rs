//! Selection gestures and keyboard shortcuts.

use vectorkit_core::{clamp, Bounds, EditError, EditResult, Point};

use super::Editor;
use crate::document::ShapeGraph;
use crate::hierarchy;
use crate::model::ShapeId;
use crate::selection::{hit_test, Selection};

impl Editor {
    /// Plain click on a shape. The active frame follows the click.
    pub fn click(&mut self, id: &str) -> EditResult<()> {
        let shapes = self.store.shapes();
        shapes.require(id)?;
        let frame = shapes.enclosing_frame(id);
        self.selection.click(id);
        self.active_frame = frame;
        Ok(())
    }

    /// Shift click toggles `id`. From an empty selection it acts as a
    /// plain click, active frame included.
    pub fn shift_click(&mut self, id: &str) -> EditResult<()> {
        self.store.shapes().require(id)?;
        self.toggle(id);
        Ok(())
    }

    fn toggle(&mut self, id: &str) {
        if self.selection.selection().is_empty() {
            self.active_frame = self.store.shapes().enclosing_frame(id);
        }
        self.selection.shift_click(id);
    }

    /// Click on the canvas. Empty space clears the selection unless shift
    /// is held.
    pub fn click_at(&mut self, point: Point, shift: bool) -> Option<ShapeId> {
        let tolerance = self.config.interaction.hit_tolerance;
        let hit = hit_test(self.store.shapes(), point, tolerance);
        match (&hit, shift) {
            (Some(id), false) => {
                let frame = self.store.shapes().enclosing_frame(id);
                self.selection.click(id);
                self.active_frame = frame;
            }
            (Some(id), true) => self.toggle(id),
            (None, false) => self.selection.clear(),
            (None, true) => {}
        }
        hit
    }

    /// Rubber-band selection within the active frame (or the top level).
    pub fn marquee(&mut self, rect: Bounds) -> &Selection {
        let frame = self.active_frame.clone();
        self.selection
            .marquee(self.store.shapes(), rect, frame.as_deref())
    }

    pub fn set_active_frame(&mut self, frame: Option<&str>) -> EditResult<()> {
        if let Some(frame) = frame {
            if !self.store.shapes().require(frame)?.is_frame() {
                return Err(EditError::invalid(format!("{} is not a frame", frame)));
            }
        }
        self.active_frame = frame.map(str::to_string);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Escape: abandons a gesture in flight, otherwise clears the selection.
    pub fn escape(&mut self) {
        if self.artboard_drag.is_some() {
            self.cancel_artboard_drag();
            return;
        }
        if let Some(drag) = self.drag.take() {
            drag.cancel();
            return;
        }
        self.selection.clear();
        self.interaction.reset();
    }

    /// Digit-key opacity shortcut applied to the whole selection in one
    /// commit. Returns the opacity the key maps to, if any.
    pub fn handle_opacity_key(&mut self, key: char, now_ms: u64) -> EditResult<Option<f64>> {
        let Some(opacity) = self.interaction.opacity_for_key(key, now_ms) else {
            return Ok(None);
        };
        let ids = self.selection.selection().ids();
        if ids.is_empty() {
            return Ok(Some(opacity));
        }
        let opacity = clamp(opacity, 0.0, 1.0);
        self.apply("opacity shortcut", |map, _, outliner| {
            for id in &ids {
                hierarchy::update_shape(map, id, outliner, |r| r.opacity = opacity)?;
            }
            Ok(())
        })?;
        Ok(Some(opacity))
    }
}
