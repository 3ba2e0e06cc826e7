//! Hierarchy moves and hierarchy-panel drag/drop.

use vectorkit_core::{EditError, EditResult, Point};

use super::Editor;
use crate::document::{FlatRow, ShapeGraph};
use crate::drag_drop::{apply_drop, DragSession, DropIndicator, DropPosition, RowRect};
use crate::hierarchy::{self, Placement};

impl Editor {
    pub fn insert_adjacent(&mut self, active: &str, over: &str, placement: Placement) -> EditResult<()> {
        self.apply("insert adjacent", |map, _, outliner| {
            hierarchy::insert_adjacent(map, active, over, placement, outliner)
        })
    }

    pub fn nest_into(&mut self, shape: &str, target: &str) -> EditResult<()> {
        self.apply("nest into", |map, _, outliner| {
            hierarchy::nest_into(map, shape, target, outliner)
        })
    }

    pub fn move_to_top_level(&mut self, shape: &str) -> EditResult<()> {
        self.apply("move to top level", |map, _, outliner| {
            hierarchy::move_to_top_level(map, shape, outliner)
        })
    }

    pub fn reorder_siblings(&mut self, active: &str, over: &str, scope: Option<&str>) -> EditResult<()> {
        self.apply("reorder", |map, _, _| {
            hierarchy::reorder_siblings(map, active, over, scope)
        })
    }

    /// Hierarchy panel rows.
    pub fn hierarchy_rows(&self) -> Vec<FlatRow> {
        self.store.shapes().flatten()
    }

    /// Starts dragging a panel row. Replaces any unfinished panel drag.
    pub fn begin_drag(&mut self, active: &str) -> EditResult<()> {
        self.store.shapes().require(active)?;
        if let Some(previous) = self.drag.take() {
            previous.cancel();
        }
        self.drag = Some(DragSession::with_split(
            active,
            self.config.interaction.drop_zone_split,
        ));
        Ok(())
    }

    /// Hovering `over` with the pointer at `pointer` inside `row`.
    pub fn hover_drag(&mut self, over: &str, pointer: Point, row: &RowRect) -> Option<DropPosition> {
        let rows = self.store.shapes().flatten();
        self.drag.as_mut()?.hover(over, pointer, row, &rows)
    }

    pub fn leave_drag(&mut self) {
        if let Some(drag) = self.drag.as_mut() {
            drag.leave();
        }
    }

    pub fn drag_indicator(&self) -> Option<DropIndicator> {
        self.drag.as_ref()?.indicator()
    }

    /// Drops the dragged row. With no valid target nothing happens.
    pub fn drop_drag(&mut self) -> EditResult<()> {
        let session = self
            .drag
            .take()
            .ok_or_else(|| EditError::invalid("no drag in progress"))?;
        let target = session
            .finish()
            .ok_or_else(|| EditError::invalid("no drop target"))?;
        self.apply("drop", |map, _, outliner| apply_drop(map, &target, outliner))
    }

    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            session.cancel();
        }
    }
}
