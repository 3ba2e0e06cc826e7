//! Selection state and selection gestures.

use vectorkit_core::{Bounds, Point};

use crate::document::ShapeGraph;
use crate::model::{ShapeId, ShapeMap};

/// The current selection.
///
/// An empty [`Selection::Multi`] is never produced: a multi selection that
/// shrinks to one entry stays `Multi`, one that shrinks to nothing becomes
/// [`Selection::None`]. `Multi` keeps ids in the order they were selected,
/// without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Single(ShapeId),
    Multi(Vec<ShapeId>),
}

impl Selection {
    fn from_ids(ids: Vec<ShapeId>) -> Self {
        let mut unique: Vec<ShapeId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        match unique.len() {
            0 => Selection::None,
            1 => unique.pop().map(Selection::Single).unwrap_or(Selection::None),
            _ => Selection::Multi(unique),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn contains(&self, id: &str) -> bool {
        match self {
            Selection::None => false,
            Selection::Single(s) => s == id,
            Selection::Multi(list) => list.iter().any(|s| s == id),
        }
    }

    /// Selected ids, earliest selected first.
    pub fn ids(&self) -> Vec<ShapeId> {
        match self {
            Selection::None => Vec::new(),
            Selection::Single(id) => vec![id.clone()],
            Selection::Multi(list) => list.clone(),
        }
    }

    /// The single selected id, or the earliest of a multi selection.
    pub fn primary(&self) -> Option<&ShapeId> {
        match self {
            Selection::None => None,
            Selection::Single(id) => Some(id),
            Selection::Multi(list) => list.first(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::None => 0,
            Selection::Single(_) => 1,
            Selection::Multi(list) => list.len(),
        }
    }
}

/// Manages selection state and the gestures that change it.
///
/// `SelectionManager` is responsible for:
/// - Plain clicks, which replace the selection
/// - Shift clicks, which toggle membership
/// - Marquee (drag rectangle) selection scoped to the active frame
/// - Dropping ids that no longer exist after undo or delete
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selection: Selection,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Replaces the selection with `id`.
    pub fn click(&mut self, id: &str) {
        self.selection = Selection::Single(id.to_string());
    }

    /// Toggles `id` in the selection.
    ///
    /// - `None` becomes `Single(id)`
    /// - `Single(a)` becomes `Multi{a, id}`, or `None` when `id == a`
    /// - `Multi(S)` toggles `id` in `S`, appending it when added
    pub fn shift_click(&mut self, id: &str) {
        let next = match std::mem::take(&mut self.selection) {
            Selection::None => Selection::Single(id.to_string()),
            Selection::Single(current) if current == id => Selection::None,
            Selection::Single(current) => {
                Selection::Multi(vec![current, id.to_string()])
            }
            Selection::Multi(mut list) => {
                match list.iter().position(|s| s == id) {
                    Some(index) => {
                        list.remove(index);
                    }
                    None => list.push(id.to_string()),
                }
                if list.is_empty() {
                    Selection::None
                } else {
                    Selection::Multi(list)
                }
            }
        };
        self.selection = next;
    }

    pub fn clear(&mut self) {
        self.selection = Selection::None;
    }

    /// Selects every candidate whose bounds strictly overlap `rect`, in
    /// panel order.
    ///
    /// Candidates are the direct children of `active_frame` when it names an
    /// existing record, otherwise the top-level shapes. Invisible and locked
    /// shapes are skipped. Boxes that only touch `rect` along an edge are not
    /// selected.
    ///
    /// # Returns
    ///
    /// The resulting selection, which is also stored.
    pub fn marquee(&mut self, shapes: &ShapeMap, rect: Bounds, active_frame: Option<&str>) -> &Selection {
        let scope = active_frame.filter(|f| shapes.contains_key(*f));
        let hits: Vec<ShapeId> = shapes
            .sibling_ids(scope)
            .into_iter()
            .filter_map(|id| shapes.get(&id))
            .filter(|r| r.visible && !r.locked)
            .filter(|r| r.bounds().intersects_open(&rect))
            .map(|r| r.id.clone())
            .collect();
        self.selection = Selection::from_ids(hits);
        &self.selection
    }

    /// Removes ids that are no longer in `shapes`.
    pub fn retain_existing(&mut self, shapes: &ShapeMap) {
        let kept: Vec<ShapeId> = self
            .selection
            .ids()
            .into_iter()
            .filter(|id| shapes.contains_key(id))
            .collect();
        if kept.len() != self.selection.len() {
            self.selection = Selection::from_ids(kept);
        }
    }

    /// Removes a single id, keeping the selection variant rules.
    pub fn remove(&mut self, id: &str) {
        if self.selection.contains(id) {
            let rest = self
                .selection
                .ids()
                .into_iter()
                .filter(|s| s != id)
                .collect();
            self.selection = Selection::from_ids(rest);
        }
    }
}

/// Topmost visible, unlocked shape under `point`.
///
/// Frames are searched children-first so a shape inside a frame wins over
/// the frame. Compounds are hit as a whole.
pub fn hit_test(shapes: &ShapeMap, point: Point, tolerance: f64) -> Option<ShapeId> {
    hit_in_scope(shapes, None, &point, tolerance)
}

fn hit_in_scope(shapes: &ShapeMap, scope: Option<&str>, point: &Point, tolerance: f64) -> Option<ShapeId> {
    for id in shapes.sibling_ids(scope).into_iter().rev() {
        let Some(record) = shapes.get(&id) else {
            continue;
        };
        if !record.visible || record.locked {
            continue;
        }
        if record.is_frame() {
            if let Some(child) = hit_in_scope(shapes, Some(&record.id), point, tolerance) {
                return Some(child);
            }
        }
        if record.hit(point, tolerance) {
            return Some(record.id.clone());
        }
    }
    None
}
