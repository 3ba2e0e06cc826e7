//! Shape records: the single entity type for leaf shapes and containers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vectorkit_core::{Bounds, Point};

mod compound;
mod effects;
mod fill;
mod filters;
mod outline;

pub use compound::{BooleanOperation, CompoundMeta, FrozenShape};
pub use effects::{Effect, EffectType};
pub use fill::{Fill, GradientFill, GradientStop, GradientType, ImageFill, ImageFit};
pub use filters::{Filter, FilterType};
pub use outline::{
    outline_area, outline_bounds, ring_area, translate_outline, Outline, OutlinePolygon,
};

/// Stable shape identifier, never reused within a session.
pub type ShapeId = String;

/// The whole document: every record keyed by id.
pub type ShapeMap = BTreeMap<ShapeId, ShapeRecord>;

/// Payload-free discriminator of [`ShapeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeType {
    Frame,
    BooleanCompound,
    Rect,
    Circle,
    Polygon,
    Star,
    Line,
    Path,
    Text,
    Photo,
}

impl ShapeType {
    /// Prefix used when allocating ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ShapeType::Frame => "frame",
            ShapeType::BooleanCompound => "bool",
            ShapeType::Rect => "rect",
            ShapeType::Circle => "circle",
            ShapeType::Polygon => "polygon",
            ShapeType::Star => "star",
            ShapeType::Line => "line",
            ShapeType::Path => "path",
            ShapeType::Text => "text",
            ShapeType::Photo => "photo",
        }
    }

    pub fn from_id_prefix(prefix: &str) -> Option<Self> {
        let ty = match prefix {
            "frame" => ShapeType::Frame,
            "bool" => ShapeType::BooleanCompound,
            "rect" => ShapeType::Rect,
            "circle" => ShapeType::Circle,
            "polygon" => ShapeType::Polygon,
            "star" => ShapeType::Star,
            "line" => ShapeType::Line,
            "path" => ShapeType::Path,
            "text" => ShapeType::Text,
            "photo" => ShapeType::Photo,
            _ => return None,
        };
        Some(ty)
    }

    /// Human label used for default names.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeType::Frame => "Canvas",
            ShapeType::BooleanCompound => "Boolean",
            ShapeType::Rect => "Rectangle",
            ShapeType::Circle => "Ellipse",
            ShapeType::Polygon => "Polygon",
            ShapeType::Star => "Star",
            ShapeType::Line => "Line",
            ShapeType::Path => "Path",
            ShapeType::Text => "Text",
            ShapeType::Photo => "Photo",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, ShapeType::Frame | ShapeType::BooleanCompound)
    }
}

/// Kind of a record plus the fields that only make sense for that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ShapeKind {
    Frame,
    BooleanCompound(CompoundMeta),
    Rect {
        #[serde(default)]
        corner_radius: f64,
    },
    Circle,
    /// Regular polygon (3 sides is a triangle, 6 a hexagon).
    Polygon { sides: u32 },
    Star { points: u32, inner_ratio: f64 },
    Line,
    /// Outline relative to the record's `x, y`.
    Path { outline: Outline },
    Text { content: String, font_size: f64 },
    Photo { src: String },
}

impl ShapeKind {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Frame => ShapeType::Frame,
            ShapeKind::BooleanCompound(_) => ShapeType::BooleanCompound,
            ShapeKind::Rect { .. } => ShapeType::Rect,
            ShapeKind::Circle => ShapeType::Circle,
            ShapeKind::Polygon { .. } => ShapeType::Polygon,
            ShapeKind::Star { .. } => ShapeType::Star,
            ShapeKind::Line => ShapeType::Line,
            ShapeKind::Path { .. } => ShapeType::Path,
            ShapeKind::Text { .. } => ShapeType::Text,
            ShapeKind::Photo { .. } => ShapeType::Photo,
        }
    }
}

/// How a layer composites onto what is below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

/// A drawable element or container.
///
/// Records are replaced wholesale on every edit; nothing holds a live
/// handle to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: ShapeId,
    pub name: String,
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, clockwise, around the record's center
    #[serde(default)]
    pub rotation: f64,
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    pub opacity: f64,
    #[serde(default)]
    pub blend_mode: BlendMode,
    /// Sort key among siblings
    pub order: usize,
    /// Immediate container, `None` at top level
    #[serde(default)]
    pub parent_id: Option<ShapeId>,
    /// Ordered child ids; only containers have any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ShapeId>,
    pub fill: Fill,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl ShapeRecord {
    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    pub fn is_frame(&self) -> bool {
        matches!(self.kind, ShapeKind::Frame)
    }

    pub fn is_compound(&self) -> bool {
        matches!(self.kind, ShapeKind::BooleanCompound(_))
    }

    pub fn is_container(&self) -> bool {
        self.shape_type().is_container()
    }

    pub fn compound_meta(&self) -> Option<&CompoundMeta> {
        match &self.kind {
            ShapeKind::BooleanCompound(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn compound_meta_mut(&mut self) -> Option<&mut CompoundMeta> {
        match &mut self.kind {
            ShapeKind::BooleanCompound(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Axis-aligned bounds in document space, rotation included.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_rotated_rect(self.x, self.y, self.width, self.height, self.rotation)
    }

    /// Moves the record. Frozen compound members move with it.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        if let ShapeKind::BooleanCompound(meta) = &mut self.kind {
            for frozen in &mut meta.children_data {
                frozen.x += dx;
                frozen.y += dy;
                frozen.outline = translate_outline(&frozen.outline, dx, dy);
            }
        }
    }

    /// Whether `point` lands on this shape. The point is taken into the
    /// shape's unrotated frame first; ellipses use the exact equation,
    /// everything else its box.
    pub fn hit(&self, point: &Point, tolerance: f64) -> bool {
        let local = point.rotate_around(self.center(), -self.rotation);
        let rect = Bounds::from_rect(self.x, self.y, self.width, self.height);
        if !rect.contains_point(&local, tolerance) {
            return false;
        }
        match self.kind {
            ShapeKind::Circle => {
                let rx = rect.width() / 2.0 + tolerance;
                let ry = rect.height() / 2.0 + tolerance;
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let c = rect.center();
                let dx = (local.x - c.x) / rx;
                let dy = (local.y - c.y) / ry;
                dx * dx + dy * dy <= 1.0
            }
            _ => true,
        }
    }
}
