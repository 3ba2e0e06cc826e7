//! Frame move/resize gestures.

use vectorkit_core::{EditError, EditResult, Point};

use super::Editor;
use crate::artboard::{ArtboardDrag, ResizeHandle};

impl Editor {
    /// Starts moving (body handle) or resizing a frame.
    pub fn begin_artboard_drag(&mut self, frame_id: &str, handle: ResizeHandle, pointer: Point) -> EditResult<()> {
        if self.artboard_drag.is_some() {
            return Err(EditError::invalid("a frame drag is already in progress"));
        }
        let drag = ArtboardDrag::begin_with_min(
            self.store.shapes(),
            frame_id,
            handle,
            pointer,
            self.config.canvas.min_frame_size,
        )?;
        self.artboard_drag = Some(drag);
        Ok(())
    }

    /// Pointer move during a frame drag. Touches only the working copy.
    pub fn update_artboard_drag(&mut self, pointer: Point) -> bool {
        match self.artboard_drag.as_mut() {
            Some(drag) => {
                drag.update(pointer);
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Pointer up. Commits once; returns whether anything changed.
    pub fn finish_artboard_drag(&mut self) -> EditResult<bool> {
        let drag = self
            .artboard_drag
            .take()
            .ok_or_else(|| EditError::invalid("no frame drag in progress"))?;
        match drag.finish() {
            Some(next) => {
                self.commit_map(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn cancel_artboard_drag(&mut self) {
        if let Some(drag) = self.artboard_drag.take() {
            drag.cancel();
            self.notify();
        }
    }

    pub fn is_artboard_dragging(&self) -> bool {
        self.artboard_drag.is_some()
    }
}
