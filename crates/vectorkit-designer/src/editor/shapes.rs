//! Shape creation, deletion and property edits.

use serde_json::Value;
use vectorkit_core::{clamp, EditError, EditResult, Point};

use super::Editor;
use crate::document::ShapeGraph;
use crate::hierarchy;
use crate::model::{BlendMode, EffectType, Fill, FilterType, ShapeId, ShapeKind, ShapeRecord};
use crate::selection::Selection;

impl Editor {
    /// Adds a pre-built record at the end of `parent` and selects it.
    pub fn add_record(&mut self, record: ShapeRecord, parent: Option<&str>) -> EditResult<ShapeId> {
        let id = self.apply("add shape", |map, _, outliner| {
            hierarchy::add_shape(map, record, parent, outliner)
        })?;
        self.selection.click(&id);
        Ok(id)
    }

    /// Creates and adds a shape of any kind.
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        parent: Option<&str>,
    ) -> EditResult<ShapeId> {
        let id = self.apply("add shape", |map, factory, outliner| {
            let record = factory.create(kind, x, y, width, height);
            hierarchy::add_shape(map, record, parent, outliner)
        })?;
        self.selection.click(&id);
        Ok(id)
    }

    /// Adds a top-level frame with the configured default size and makes it
    /// the active frame.
    pub fn add_frame(&mut self, x: f64, y: f64) -> EditResult<ShapeId> {
        let id = self.apply("add frame", |map, factory, outliner| {
            hierarchy::add_shape(map, factory.frame(x, y), None, outliner)
        })?;
        self.selection.click(&id);
        self.active_frame = Some(id.clone());
        Ok(id)
    }

    pub fn add_rect(&mut self, x: f64, y: f64, width: f64, height: f64, parent: Option<&str>) -> EditResult<ShapeId> {
        self.add_shape(ShapeKind::Rect { corner_radius: 0.0 }, x, y, width, height, parent)
    }

    pub fn add_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64, parent: Option<&str>) -> EditResult<ShapeId> {
        self.add_shape(ShapeKind::Circle, x, y, width, height, parent)
    }

    pub fn add_star(&mut self, x: f64, y: f64, width: f64, height: f64, parent: Option<&str>) -> EditResult<ShapeId> {
        let id = self.apply("add star", |map, factory, outliner| {
            hierarchy::add_shape(map, factory.star(x, y, width, height), parent, outliner)
        })?;
        self.selection.click(&id);
        Ok(id)
    }

    pub fn add_line(&mut self, start: Point, end: Point, parent: Option<&str>) -> EditResult<ShapeId> {
        let id = self.apply("add line", |map, factory, outliner| {
            hierarchy::add_shape(map, factory.line(start, end), parent, outliner)
        })?;
        self.selection.click(&id);
        Ok(id)
    }

    pub fn add_path(&mut self, points: Vec<Point>, parent: Option<&str>) -> EditResult<ShapeId> {
        if points.len() < 2 {
            return Err(EditError::invalid("a path needs at least two points"));
        }
        let id = self.apply("add path", |map, factory, outliner| {
            hierarchy::add_shape(map, factory.path(points), parent, outliner)
        })?;
        self.selection.click(&id);
        Ok(id)
    }

    pub fn add_text(&mut self, content: &str, x: f64, y: f64, font_size: f64, parent: Option<&str>) -> EditResult<ShapeId> {
        let id = self.apply("add text", |map, factory, outliner| {
            hierarchy::add_shape(map, factory.text(content, x, y, font_size), parent, outliner)
        })?;
        self.selection.click(&id);
        Ok(id)
    }

    /// Deletes `id` and its subtree.
    ///
    /// If `id` was the selection, a deleted frame hands the selection to
    /// its former parent and a deleted object clears it.
    pub fn delete(&mut self, id: &str) -> EditResult<Vec<ShapeId>> {
        let record = self.store.shapes().require(id)?;
        let was_frame = record.is_frame();
        let former_parent = record.parent_id.clone();
        let was_sole_selection = self.selection.selection() == &Selection::Single(id.to_string());

        let removed = self.apply("delete", |map, _, _| hierarchy::delete(map, id))?;

        if was_sole_selection {
            match former_parent.filter(|_| was_frame) {
                Some(parent) => self.selection.click(&parent),
                None => self.selection.clear(),
            }
        }
        Ok(removed)
    }

    /// Deletes every selected shape in one commit.
    pub fn delete_selected(&mut self) -> EditResult<Vec<ShapeId>> {
        let ids = self.selection.selection().ids();
        if ids.is_empty() {
            return Err(EditError::invalid("nothing selected"));
        }
        let removed = self.apply("delete selection", |map, _, _| {
            let mut removed = Vec::new();
            for id in &ids {
                // Already gone with an ancestor.
                if map.contains_key(id) {
                    removed.extend(hierarchy::delete(map, id)?);
                }
            }
            Ok(removed)
        })?;
        self.selection.clear();
        Ok(removed)
    }

    /// Copy-on-write property edit of one record.
    pub fn update_shape<F>(&mut self, id: &str, edit: F) -> EditResult<()>
    where
        F: FnOnce(&mut ShapeRecord),
    {
        self.apply("update shape", |map, _, outliner| {
            hierarchy::update_shape(map, id, outliner, edit)
        })
    }

    pub fn rename(&mut self, id: &str, name: &str) -> EditResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditError::invalid("name cannot be empty"));
        }
        self.update_shape(id, |r| r.name = name.to_string())
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) -> EditResult<()> {
        if visible && self.store.shapes().parent_of(id).is_some_and(|p| p.is_compound()) {
            return Err(EditError::invalid(format!(
                "{} belongs to a compound and stays hidden",
                id
            )));
        }
        self.update_shape(id, |r| r.visible = visible)
    }

    pub fn set_locked(&mut self, id: &str, locked: bool) -> EditResult<()> {
        self.update_shape(id, |r| r.locked = locked)
    }

    pub fn set_opacity(&mut self, id: &str, opacity: f64) -> EditResult<()> {
        self.update_shape(id, |r| r.opacity = clamp(opacity, 0.0, 1.0))
    }

    pub fn set_blend_mode(&mut self, id: &str, blend_mode: BlendMode) -> EditResult<()> {
        self.update_shape(id, |r| r.blend_mode = blend_mode)
    }

    pub fn set_fill(&mut self, id: &str, fill: Fill) -> EditResult<()> {
        self.update_shape(id, |r| r.fill = fill)
    }

    /// Moves and sizes a shape. Frames never shrink below the minimum
    /// frame size.
    pub fn set_geometry(&mut self, id: &str, x: f64, y: f64, width: f64, height: f64) -> EditResult<()> {
        let min = self.config.canvas.min_frame_size;
        self.update_shape(id, |r| {
            let (width, height) = if r.is_frame() {
                (width.max(min), height.max(min))
            } else {
                (width, height)
            };
            let (dx, dy) = (x - r.x, y - r.y);
            // Compound members are frozen in document space.
            r.translate(dx, dy);
            r.width = width;
            r.height = height;
        })
    }

    pub fn set_rotation(&mut self, id: &str, degrees: f64) -> EditResult<()> {
        self.update_shape(id, |r| r.rotation = degrees.rem_euclid(360.0))
    }

    /// Appends a filter with default parameters. Returns its id.
    pub fn add_filter(&mut self, id: &str, filter_type: FilterType) -> EditResult<String> {
        self.apply("add filter", |map, factory, outliner| {
            map.require(id)?;
            let filter = factory.create_filter(filter_type);
            let filter_id = filter.id.clone();
            hierarchy::update_shape(map, id, outliner, |r| r.filters.push(filter))?;
            Ok(filter_id)
        })
    }

    pub fn remove_filter(&mut self, id: &str, filter_id: &str) -> EditResult<()> {
        self.require_filter(id, filter_id)?;
        self.update_shape(id, |r| r.filters.retain(|f| f.id != filter_id))
    }

    pub fn toggle_filter(&mut self, id: &str, filter_id: &str) -> EditResult<()> {
        self.require_filter(id, filter_id)?;
        self.update_shape(id, |r| {
            for filter in r.filters.iter_mut().filter(|f| f.id == filter_id) {
                filter.enabled = !filter.enabled;
            }
        })
    }

    pub fn set_filter_param(&mut self, id: &str, filter_id: &str, key: &str, value: Value) -> EditResult<()> {
        self.require_filter(id, filter_id)?;
        self.update_shape(id, |r| {
            for filter in r.filters.iter_mut().filter(|f| f.id == filter_id) {
                filter.params.insert(key.to_string(), value.clone());
            }
        })
    }

    fn require_filter(&self, id: &str, filter_id: &str) -> EditResult<()> {
        let record = self.store.shapes().require(id)?;
        if record.filters.iter().any(|f| f.id == filter_id) {
            Ok(())
        } else {
            Err(EditError::missing(filter_id))
        }
    }

    pub fn add_effect(&mut self, id: &str, effect_type: EffectType) -> EditResult<()> {
        let effect = self.factory.default_effect(effect_type);
        self.update_shape(id, |r| r.effects.push(effect))
    }

    pub fn remove_effect(&mut self, id: &str, index: usize) -> EditResult<()> {
        self.require_effect(id, index)?;
        self.update_shape(id, |r| {
            r.effects.remove(index);
        })
    }

    pub fn toggle_effect(&mut self, id: &str, index: usize) -> EditResult<()> {
        self.require_effect(id, index)?;
        self.update_shape(id, |r| {
            if let Some(effect) = r.effects.get_mut(index) {
                let visible = effect.is_visible();
                effect.set_visible(!visible);
            }
        })
    }

    fn require_effect(&self, id: &str, index: usize) -> EditResult<()> {
        let record = self.store.shapes().require(id)?;
        if index < record.effects.len() {
            Ok(())
        } else {
            Err(EditError::invalid(format!("{} has no effect #{}", id, index)))
        }
    }
}
