use serde::{Deserialize, Serialize};
use vectorkit_core::{Bounds, Point};

/// One filled region: an exterior ring with optional holes.
///
/// Rings are stored open (the closing vertex is implied).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutlinePolygon {
    pub exterior: Vec<Point>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Vec<Point>>,
}

/// A possibly disjoint outline made of several polygons.
pub type Outline = Vec<OutlinePolygon>;

impl OutlinePolygon {
    pub fn new(exterior: Vec<Point>) -> Self {
        Self {
            exterior,
            holes: Vec::new(),
        }
    }

    /// A ring needs three vertices to enclose any area.
    pub fn is_degenerate(&self) -> bool {
        self.exterior.len() < 3
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let shift = |ring: &Vec<Point>| -> Vec<Point> {
            ring.iter().map(|p| p.offset(dx, dy)).collect()
        };
        Self {
            exterior: shift(&self.exterior),
            holes: self.holes.iter().map(shift).collect(),
        }
    }

    pub fn rotated(&self, center: Point, angle_deg: f64) -> Self {
        let turn = |ring: &Vec<Point>| -> Vec<Point> {
            ring.iter()
                .map(|p| p.rotate_around(center, angle_deg))
                .collect()
        };
        Self {
            exterior: turn(&self.exterior),
            holes: self.holes.iter().map(turn).collect(),
        }
    }

    /// Unsigned area of the exterior minus the holes.
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| ring_area(h).abs()).sum();
        (ring_area(&self.exterior).abs() - holes).max(0.0)
    }
}

/// Signed shoelace area of an open ring.
pub fn ring_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = &ring[(i + 1) % ring.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Total filled area of an outline.
pub fn outline_area(outline: &[OutlinePolygon]) -> f64 {
    outline.iter().map(OutlinePolygon::area).sum()
}

/// Bounds of every exterior vertex, or `None` for an empty outline.
pub fn outline_bounds(outline: &[OutlinePolygon]) -> Option<Bounds> {
    Bounds::from_points(outline.iter().flat_map(|p| p.exterior.iter().copied()))
}

pub fn translate_outline(outline: &[OutlinePolygon], dx: f64, dy: f64) -> Outline {
    outline.iter().map(|p| p.translated(dx, dy)).collect()
}
