//! The rendering boundary.
//!
//! The engine never draws. After every change it hands the full shape map
//! to registered [`RenderSink`]s; [`render_list`] gives sinks the draw order.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::warn;

use crate::boolean::Outliner;
use crate::document::ShapeGraph;
use crate::model::{Filter, Outline, ShapeId, ShapeMap, ShapeRecord};

/// Receives the document after every commit, undo, redo and load.
pub trait RenderSink {
    fn document_changed(&mut self, shapes: &ShapeMap);
}

/// One entry of the draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub id: ShapeId,
    pub depth: usize,
    /// Computed result of a boolean compound; `None` for other shapes or
    /// when the compound's result is empty.
    pub outline: Option<Outline>,
}

/// Visible shapes in paint order (parents before children, siblings by
/// order). Hidden shapes hide their subtree; compound members are never
/// listed.
pub fn render_list(shapes: &ShapeMap, outliner: &Outliner) -> Vec<RenderItem> {
    let mut items = Vec::new();
    for id in shapes.sibling_ids(None) {
        push_visible(shapes, &id, 0, outliner, &mut items);
    }
    items
}

fn push_visible(shapes: &ShapeMap, id: &str, depth: usize, outliner: &Outliner, items: &mut Vec<RenderItem>) {
    let Some(record) = shapes.get(id) else {
        return;
    };
    if !record.visible {
        return;
    }
    let outline = if record.is_compound() {
        match outliner.outline_of(record) {
            Ok(outline) => Some(outline),
            Err(err) => {
                warn!(compound = id, error = %err, "compound has no drawable result");
                None
            }
        }
    } else {
        None
    };
    items.push(RenderItem {
        id: record.id.clone(),
        depth,
        outline,
    });
    if record.is_frame() {
        for child in &record.children {
            push_visible(shapes, child, depth + 1, outliner, items);
        }
    }
}

/// A raster produced by the filter collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row major.
    pub pixels: Arc<[u8]>,
}

/// Computes filter pixels outside the engine.
pub trait FilterRenderer {
    /// Asks for a raster of `shape` with `filters` applied. Results come
    /// back through [`FilterRasterCache::deliver`].
    fn request(&mut self, shape: &ShapeRecord, filters: &[Filter]);
}

/// Last raster delivered per shape.
#[derive(Debug, Clone, Default)]
pub struct FilterRasterCache {
    rasters: HashMap<ShapeId, Raster>,
    pending: HashSet<ShapeId>,
}

impl FilterRasterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a raster for the record's enabled filters. With none
    /// enabled the cached raster is dropped instead.
    pub fn refresh(&mut self, renderer: &mut dyn FilterRenderer, record: &ShapeRecord) {
        let enabled: Vec<Filter> = record.filters.iter().filter(|f| f.enabled).cloned().collect();
        if enabled.is_empty() {
            self.invalidate(&record.id);
            return;
        }
        self.pending.insert(record.id.clone());
        renderer.request(record, &enabled);
    }

    pub fn deliver(&mut self, shape_id: &str, raster: Raster) {
        self.pending.remove(shape_id);
        self.rasters.insert(shape_id.to_string(), raster);
    }

    pub fn get(&self, shape_id: &str) -> Option<&Raster> {
        self.rasters.get(shape_id)
    }

    pub fn is_pending(&self, shape_id: &str) -> bool {
        self.pending.contains(shape_id)
    }

    pub fn invalidate(&mut self, shape_id: &str) {
        self.rasters.remove(shape_id);
        self.pending.remove(shape_id);
    }

    /// Drops entries for shapes no longer in `shapes`.
    pub fn retain_existing(&mut self, shapes: &ShapeMap) {
        self.rasters.retain(|id, _| shapes.contains_key(id));
        self.pending.retain(|id| shapes.contains_key(id));
    }
}

impl RenderSink for FilterRasterCache {
    fn document_changed(&mut self, shapes: &ShapeMap) {
        self.retain_existing(shapes);
    }
}
