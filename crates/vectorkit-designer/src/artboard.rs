//! Frame move and resize gestures.
//!
//! Pointer moves update a working copy of the shape map; only `finish`
//! produces a map to commit, so a whole gesture is one undo step.

use tracing::debug;
use vectorkit_core::constants::MIN_FRAME_SIZE;
use vectorkit_core::{EditError, EditResult, Point};

use crate::document::ShapeGraph;
use crate::model::{ShapeId, ShapeMap};

/// Which side of an axis a handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleAnchor {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandle {
    pub direction_x: HandleAnchor,
    pub direction_y: HandleAnchor,
}

impl ResizeHandle {
    pub const BODY: Self = Self::new(HandleAnchor::Center, HandleAnchor::Center);
    pub const NORTH: Self = Self::new(HandleAnchor::Center, HandleAnchor::Start);
    pub const SOUTH: Self = Self::new(HandleAnchor::Center, HandleAnchor::End);
    pub const WEST: Self = Self::new(HandleAnchor::Start, HandleAnchor::Center);
    pub const EAST: Self = Self::new(HandleAnchor::End, HandleAnchor::Center);
    pub const NORTH_WEST: Self = Self::new(HandleAnchor::Start, HandleAnchor::Start);
    pub const NORTH_EAST: Self = Self::new(HandleAnchor::End, HandleAnchor::Start);
    pub const SOUTH_WEST: Self = Self::new(HandleAnchor::Start, HandleAnchor::End);
    pub const SOUTH_EAST: Self = Self::new(HandleAnchor::End, HandleAnchor::End);

    pub const fn new(direction_x: HandleAnchor, direction_y: HandleAnchor) -> Self {
        Self {
            direction_x,
            direction_y,
        }
    }

    /// The body handle moves instead of resizing.
    pub fn is_move(&self) -> bool {
        *self == Self::BODY
    }
}

/// New `(position, size)` on one axis after dragging by `delta`.
///
/// `Start` moves the near edge and keeps the far edge fixed, `End` moves
/// only the far edge, `Center` leaves the axis alone. Size never drops
/// below `min_size`; when clamping a `Start` edge the far edge stays put.
pub fn resize_axis(anchor: HandleAnchor, position: f64, size: f64, delta: f64, min_size: f64) -> (f64, f64) {
    match anchor {
        HandleAnchor::Center => (position, size),
        HandleAnchor::End => (position, (size + delta).max(min_size)),
        HandleAnchor::Start => {
            let new_position = position + delta;
            let new_size = size + (position - new_position);
            if new_size < min_size {
                (position + size - min_size, min_size)
            } else {
                (new_position, new_size)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FrameBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// An in-flight frame drag.
#[derive(Debug, Clone)]
pub struct ArtboardDrag {
    frame_id: ShapeId,
    handle: ResizeHandle,
    origin: Point,
    original: FrameBox,
    base: ShapeMap,
    working: ShapeMap,
    min_size: f64,
    changed: bool,
}

impl ArtboardDrag {
    /// Starts dragging `frame_id` by `handle` at `pointer`.
    pub fn begin(shapes: &ShapeMap, frame_id: &str, handle: ResizeHandle, pointer: Point) -> EditResult<Self> {
        Self::begin_with_min(shapes, frame_id, handle, pointer, MIN_FRAME_SIZE)
    }

    pub fn begin_with_min(
        shapes: &ShapeMap,
        frame_id: &str,
        handle: ResizeHandle,
        pointer: Point,
        min_size: f64,
    ) -> EditResult<Self> {
        let frame = shapes.require(frame_id)?;
        if !frame.is_frame() {
            return Err(EditError::invalid(format!("{} is not a frame", frame_id)));
        }
        if frame.locked {
            return Err(EditError::invalid(format!("frame {} is locked", frame_id)));
        }
        debug!(frame = frame_id, ?handle, "artboard drag started");
        Ok(Self {
            frame_id: frame_id.to_string(),
            handle,
            origin: pointer,
            original: FrameBox {
                x: frame.x,
                y: frame.y,
                width: frame.width,
                height: frame.height,
            },
            base: shapes.clone(),
            working: shapes.clone(),
            min_size,
            changed: false,
        })
    }

    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }

    /// The live map to render while dragging.
    pub fn working(&self) -> &ShapeMap {
        &self.working
    }

    /// Recomputes the working copy for the pointer at `pointer`.
    pub fn update(&mut self, pointer: Point) {
        let dx = pointer.x - self.origin.x;
        let dy = pointer.y - self.origin.y;
        let mut working = self.base.clone();

        if self.handle.is_move() {
            let mut moved = self.base.descendants(&self.frame_id);
            moved.push(self.frame_id.clone());
            for id in &moved {
                if let Some(record) = working.get_mut(id) {
                    record.translate(dx, dy);
                }
            }
        } else {
            let o = self.original;
            let (x, width) = resize_axis(self.handle.direction_x, o.x, o.width, dx, self.min_size);
            let (y, height) = resize_axis(self.handle.direction_y, o.y, o.height, dy, self.min_size);
            if let Some(frame) = working.get_mut(&self.frame_id) {
                frame.x = x;
                frame.y = y;
                frame.width = width;
                frame.height = height;
            }
        }

        self.changed = working != self.base;
        self.working = working;
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Ends the gesture. Returns the map to commit, or `None` when nothing
    /// moved.
    pub fn finish(self) -> Option<ShapeMap> {
        debug!(frame = %self.frame_id, changed = self.changed, "artboard drag finished");
        self.changed.then_some(self.working)
    }

    /// Drops the working copy.
    pub fn cancel(self) {
        debug!(frame = %self.frame_id, "artboard drag cancelled");
    }
}
