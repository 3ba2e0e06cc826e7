//! Drop decisions for the hierarchy panel.

use tracing::debug;
use vectorkit_core::constants::DROP_ZONE_SPLIT;
use vectorkit_core::{EditError, EditResult, Point};

use crate::boolean::Outliner;
use crate::document::FlatRow;
use crate::hierarchy::{insert_adjacent, nest_into, Placement};
use crate::model::{ShapeId, ShapeMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
    Inside,
}

/// What the panel draws while hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIndicator {
    /// Insertion line above or below the row.
    Line(Placement),
    /// Outline around a container row.
    Outline,
}

impl From<DropPosition> for DropIndicator {
    fn from(position: DropPosition) -> Self {
        match position {
            DropPosition::Before => DropIndicator::Line(Placement::Before),
            DropPosition::After => DropIndicator::Line(Placement::After),
            DropPosition::Inside => DropIndicator::Outline,
        }
    }
}

/// Screen rectangle of a hierarchy row, in the same space as the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Decides where a dragged row lands.
///
/// Over a plain row the list direction decides: moving up inserts before,
/// moving down inserts after. Over a container row the left `split` share
/// of the width reorders by vertical half and the rest nests inside.
pub fn decide_drop(
    active_index: usize,
    over_index: usize,
    over_is_container: bool,
    pointer: Point,
    row: &RowRect,
    split: f64,
) -> DropPosition {
    if !over_is_container {
        return if active_index > over_index {
            DropPosition::Before
        } else {
            DropPosition::After
        };
    }
    if pointer.x - row.x > row.width * split {
        return DropPosition::Inside;
    }
    if pointer.y - row.y < row.height / 2.0 {
        DropPosition::Before
    } else {
        DropPosition::After
    }
}

/// The resolved target of a finished drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub active: ShapeId,
    pub over: ShapeId,
    pub position: DropPosition,
}

/// One drag gesture in the hierarchy panel.
#[derive(Debug, Clone)]
pub struct DragSession {
    active: ShapeId,
    over: Option<ShapeId>,
    position: Option<DropPosition>,
    split: f64,
}

impl DragSession {
    pub fn start(active: impl Into<ShapeId>) -> Self {
        Self::with_split(active, DROP_ZONE_SPLIT)
    }

    pub fn with_split(active: impl Into<ShapeId>, split: f64) -> Self {
        Self {
            active: active.into(),
            over: None,
            position: None,
            split,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Updates the hover target. `rows` is the flattened panel. Hovering
    /// the dragged row or an unknown row clears the target.
    pub fn hover(&mut self, over: &str, pointer: Point, row: &RowRect, rows: &[FlatRow]) -> Option<DropPosition> {
        self.over = None;
        self.position = None;
        if over == self.active {
            return None;
        }
        let active_index = rows.iter().position(|r| r.id == self.active)?;
        let (over_index, over_row) = rows.iter().enumerate().find(|(_, r)| r.id == over)?;

        let position = decide_drop(
            active_index,
            over_index,
            over_row.is_container,
            pointer,
            row,
            self.split,
        );
        self.over = Some(over.to_string());
        self.position = Some(position);
        Some(position)
    }

    /// Pointer left every row.
    pub fn leave(&mut self) {
        self.over = None;
        self.position = None;
    }

    pub fn indicator(&self) -> Option<DropIndicator> {
        self.position.map(DropIndicator::from)
    }

    pub fn target(&self) -> Option<(&str, DropPosition)> {
        Some((self.over.as_deref()?, self.position?))
    }

    /// Ends the gesture. `None` means the drop does nothing.
    pub fn finish(self) -> Option<DropTarget> {
        Some(DropTarget {
            active: self.active,
            over: self.over?,
            position: self.position?,
        })
    }

    /// Abandons the gesture.
    pub fn cancel(self) {
        debug!(active = %self.active, "drag cancelled");
    }
}

/// Applies a finished drop to a draft.
pub fn apply_drop(map: &mut ShapeMap, target: &DropTarget, outliner: &Outliner) -> EditResult<()> {
    if target.active == target.over {
        return Err(EditError::invalid("cannot drop a shape onto itself"));
    }
    match target.position {
        DropPosition::Inside => nest_into(map, &target.active, &target.over, outliner),
        DropPosition::Before => insert_adjacent(map, &target.active, &target.over, Placement::Before, outliner),
        DropPosition::After => insert_adjacent(map, &target.active, &target.over, Placement::After, outliner),
    }
}
