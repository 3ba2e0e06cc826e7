//! Shape record factory.
//!
//! Builds default-initialized records and hands out ids of the form
//! `<prefix>-<n>`, with one monotonically increasing counter per kind.

use std::collections::HashMap;

use vectorkit_core::{Bounds, Point};
use vectorkit_settings::Config;

use crate::model::{
    outline_bounds, translate_outline, BlendMode, BooleanOperation, CompoundMeta, Effect,
    EffectType, Fill, Filter, FilterType, FrozenShape, ImageFill, ImageFit, Outline,
    OutlinePolygon, ShapeId, ShapeKind, ShapeMap, ShapeRecord, ShapeType,
};

const FILTER_PREFIX: &str = "filter";

/// Allocates ids and builds records with default styling.
#[derive(Debug, Clone)]
pub struct ShapeFactory {
    counters: HashMap<ShapeType, u64>,
    filter_counter: u64,
    default_frame_size: (f64, f64),
    star_inner_ratio: f64,
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ShapeFactory {
    pub fn new(config: &Config) -> Self {
        Self {
            counters: HashMap::new(),
            filter_counter: 0,
            default_frame_size: (
                config.canvas.default_frame_width,
                config.canvas.default_frame_height,
            ),
            star_inner_ratio: config.geometry.star_inner_ratio,
        }
    }

    fn next_number(&mut self, ty: ShapeType) -> u64 {
        let counter = self.counters.entry(ty).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Allocates the next id for `ty` without building a record.
    pub fn next_id(&mut self, ty: ShapeType) -> ShapeId {
        let n = self.next_number(ty);
        format!("{}-{}", ty.id_prefix(), n)
    }

    /// Bumps every counter past the ids already present in `shapes`, so a
    /// loaded document never sees a reused id.
    pub fn sync_with(&mut self, shapes: &ShapeMap) {
        for record in shapes.values() {
            if let Some((ty, n)) = parse_id(&record.id) {
                let counter = self.counters.entry(ty).or_insert(0);
                *counter = (*counter).max(n);
            }
            for filter in &record.filters {
                if let Some(n) = filter
                    .id
                    .strip_prefix(FILTER_PREFIX)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .and_then(|n| n.parse::<u64>().ok())
                {
                    self.filter_counter = self.filter_counter.max(n);
                }
            }
        }
    }

    /// Builds a record of any kind with default styling.
    pub fn create(&mut self, kind: ShapeKind, x: f64, y: f64, width: f64, height: f64) -> ShapeRecord {
        let ty = kind.shape_type();
        let n = self.next_number(ty);
        let fill = match ty {
            ShapeType::Frame => Fill::solid("#ffffff"),
            ShapeType::Text | ShapeType::Line => Fill::solid("#000000"),
            _ => Fill::default(),
        };

        ShapeRecord {
            id: format!("{}-{}", ty.id_prefix(), n),
            name: format!("{} {}", ty.label(), n),
            kind,
            x,
            y,
            width,
            height,
            rotation: 0.0,
            visible: true,
            locked: false,
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            order: 0,
            parent_id: None,
            children: Vec::new(),
            fill,
            filters: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// A frame with the configured default size.
    pub fn frame(&mut self, x: f64, y: f64) -> ShapeRecord {
        let (w, h) = self.default_frame_size;
        self.create(ShapeKind::Frame, x, y, w, h)
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ShapeRecord {
        self.create(
            ShapeKind::Rect { corner_radius: 0.0 },
            x,
            y,
            width,
            height,
        )
    }

    pub fn ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) -> ShapeRecord {
        self.create(ShapeKind::Circle, x, y, width, height)
    }

    pub fn polygon(&mut self, x: f64, y: f64, width: f64, height: f64, sides: u32) -> ShapeRecord {
        self.create(ShapeKind::Polygon { sides: sides.max(3) }, x, y, width, height)
    }

    pub fn star(&mut self, x: f64, y: f64, width: f64, height: f64) -> ShapeRecord {
        let inner_ratio = self.star_inner_ratio;
        self.create(
            ShapeKind::Star {
                points: vectorkit_core::constants::STAR_POINTS,
                inner_ratio,
            },
            x,
            y,
            width,
            height,
        )
    }

    /// A line from `start` to `end`; width/height may be negative.
    pub fn line(&mut self, start: Point, end: Point) -> ShapeRecord {
        self.create(
            ShapeKind::Line,
            start.x,
            start.y,
            end.x - start.x,
            end.y - start.y,
        )
    }

    /// A closed path through `points` (document space).
    pub fn path(&mut self, points: Vec<Point>) -> ShapeRecord {
        self.path_from_outline(vec![OutlinePolygon::new(points)])
    }

    /// A path from an outline in document space. The outline is stored
    /// relative to the record origin.
    pub fn path_from_outline(&mut self, outline: Outline) -> ShapeRecord {
        let bounds = outline_bounds(&outline).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0));
        let local = translate_outline(&outline, -bounds.min_x, -bounds.min_y);
        self.create(
            ShapeKind::Path { outline: local },
            bounds.min_x,
            bounds.min_y,
            bounds.width(),
            bounds.height(),
        )
    }

    pub fn text(&mut self, content: impl Into<String>, x: f64, y: f64, font_size: f64) -> ShapeRecord {
        let content = content.into();
        // Rough advance width until the renderer reports real metrics.
        let width = content.chars().count().max(1) as f64 * font_size * 0.6;
        let height = font_size * 1.2;
        self.create(ShapeKind::Text { content, font_size }, x, y, width, height)
    }

    pub fn photo(&mut self, src: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> ShapeRecord {
        let src = src.into();
        let mut record = self.create(
            ShapeKind::Photo { src: src.clone() },
            x,
            y,
            width,
            height,
        );
        record.fill = Fill::Image(ImageFill {
            src,
            fit: ImageFit::Fill,
        });
        record
    }

    /// A boolean compound occupying `bounds`. Children are attached by the
    /// boolean engine.
    pub fn compound(
        &mut self,
        operation: BooleanOperation,
        bounds: Bounds,
        children_data: Vec<FrozenShape>,
    ) -> ShapeRecord {
        let mut record = self.create(
            ShapeKind::BooleanCompound(CompoundMeta {
                operation,
                children_data,
            }),
            bounds.min_x,
            bounds.min_y,
            bounds.width(),
            bounds.height(),
        );
        let n = record.id.rsplit('-').next().unwrap_or("1").to_string();
        record.name = format!("{} {}", operation.label(), n);
        record
    }

    /// A filter descriptor with the type's default parameters.
    pub fn create_filter(&mut self, filter_type: FilterType) -> Filter {
        self.filter_counter += 1;
        Filter::new(
            format!("{}-{}", FILTER_PREFIX, self.filter_counter),
            filter_type,
        )
    }

    pub fn default_effect(&self, effect_type: EffectType) -> Effect {
        Effect::default_for(effect_type)
    }
}

fn parse_id(id: &str) -> Option<(ShapeType, u64)> {
    let (prefix, n) = id.rsplit_once('-')?;
    Some((ShapeType::from_id_prefix(prefix)?, n.parse().ok()?))
}
