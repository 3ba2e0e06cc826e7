//! Polygon approximations of shape records.

use std::f64::consts::{PI, TAU};

use vectorkit_core::constants::{AREA_EPSILON, CIRCLE_SEGMENTS};
use vectorkit_core::{Bounds, EditError, EditResult, Point};
use vectorkit_settings::GeometrySettings;

use super::csg;
use crate::model::{
    outline_area, translate_outline, CompoundMeta, FrozenShape, Outline, OutlinePolygon,
    ShapeKind, ShapeRecord,
};

/// Turns records into document-space outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outliner {
    pub circle_segments: usize,
    pub area_epsilon: f64,
}

impl Default for Outliner {
    fn default() -> Self {
        Self {
            circle_segments: CIRCLE_SEGMENTS,
            area_epsilon: AREA_EPSILON,
        }
    }
}

impl Outliner {
    pub fn from_settings(settings: &GeometrySettings) -> Self {
        Self {
            circle_segments: settings.circle_segments.max(3),
            area_epsilon: settings.area_epsilon,
        }
    }

    /// The record's outline in document space, rotation applied.
    pub fn outline_of(&self, record: &ShapeRecord) -> EditResult<Outline> {
        let rect = Bounds::from_rect(record.x, record.y, record.width, record.height);
        let center = rect.center();
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;

        let outline = match &record.kind {
            ShapeKind::Frame
            | ShapeKind::Rect { .. }
            | ShapeKind::Text { .. }
            | ShapeKind::Photo { .. } => vec![OutlinePolygon::new(vec![
                Point::new(rect.min_x, rect.min_y),
                Point::new(rect.max_x, rect.min_y),
                Point::new(rect.max_x, rect.max_y),
                Point::new(rect.min_x, rect.max_y),
            ])],
            ShapeKind::Circle => vec![OutlinePolygon::new(
                (0..self.circle_segments)
                    .map(|i| {
                        let t = TAU * i as f64 / self.circle_segments as f64;
                        Point::new(center.x + rx * t.cos(), center.y + ry * t.sin())
                    })
                    .collect(),
            )],
            ShapeKind::Polygon { sides } => {
                let n = (*sides).max(3) as usize;
                vec![OutlinePolygon::new(
                    (0..n)
                        .map(|i| {
                            let t = -PI / 2.0 + TAU * i as f64 / n as f64;
                            Point::new(center.x + rx * t.cos(), center.y + ry * t.sin())
                        })
                        .collect(),
                )]
            }
            ShapeKind::Star {
                points,
                inner_ratio,
            } => {
                let n = (*points).max(2) as usize * 2;
                vec![OutlinePolygon::new(
                    (0..n)
                        .map(|i| {
                            let scale = if i % 2 == 0 { 1.0 } else { *inner_ratio };
                            let t = -PI / 2.0 + PI * i as f64 / (n / 2) as f64;
                            Point::new(
                                center.x + rx * scale * t.cos(),
                                center.y + ry * scale * t.sin(),
                            )
                        })
                        .collect(),
                )]
            }
            ShapeKind::Line => vec![OutlinePolygon::new(vec![
                Point::new(record.x, record.y),
                Point::new(record.x + record.width, record.y + record.height),
            ])],
            ShapeKind::Path { outline } => translate_outline(outline, record.x, record.y),
            ShapeKind::BooleanCompound(meta) => self.compute_outline(meta)?,
        };

        if record.rotation.abs() < f64::EPSILON {
            return Ok(outline);
        }
        let pivot = record.center();
        Ok(outline
            .iter()
            .map(|p| p.rotated(pivot, record.rotation))
            .collect())
    }

    /// Snapshot of the record's outline and style for a compound.
    pub fn freeze(&self, record: &ShapeRecord) -> EditResult<FrozenShape> {
        Ok(FrozenShape {
            id: record.id.clone(),
            shape_type: record.shape_type(),
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            rotation: record.rotation,
            color: record.fill.primary_color().map(str::to_string),
            outline: self.outline_of(record)?,
        })
    }

    /// Applies the compound's operation left to right over its members.
    ///
    /// Fails with a geometry error when the polygon algebra panics or the
    /// result encloses no area.
    pub fn compute_outline(&self, meta: &CompoundMeta) -> EditResult<Outline> {
        let members: Vec<&Outline> = meta.children_data.iter().map(|f| &f.outline).collect();
        if members.is_empty() {
            return Err(EditError::geometry("compound has no members"));
        }
        let result = csg::combine(meta.operation, &members)?;
        if outline_area(&result) <= self.area_epsilon {
            return Err(EditError::geometry(format!(
                "{} produced an empty outline",
                meta.operation.label()
            )));
        }
        Ok(result)
    }
}
