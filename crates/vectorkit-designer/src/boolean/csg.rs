//! Bridge between outlines and csgrs sketches.

use std::panic::{self, AssertUnwindSafe};

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use vectorkit_core::{EditError, EditResult, Point};

use crate::model::{BooleanOperation, Outline, OutlinePolygon};

fn ring_coords(ring: &[Point]) -> Vec<[f64; 2]> {
    ring.iter().map(|p| [p.x, p.y]).collect()
}

fn polygon_sketch(polygon: &OutlinePolygon) -> Sketch<()> {
    let mut sketch = Sketch::polygon(&ring_coords(&polygon.exterior), None);
    for hole in polygon.holes.iter().filter(|h| h.len() >= 3) {
        sketch = sketch.difference(&Sketch::polygon(&ring_coords(hole), None));
    }
    sketch
}

pub(crate) fn outline_to_sketch(outline: &[OutlinePolygon]) -> Sketch<()> {
    let mut sketch: Sketch<()> = Sketch::new();
    for polygon in outline.iter().filter(|p| !p.is_degenerate()) {
        sketch = sketch.union(&polygon_sketch(polygon));
    }
    sketch
}

/// Drops the repeated closing vertex.
fn open_ring(mut ring: Vec<Point>) -> Vec<Point> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

pub(crate) fn sketch_to_outline(sketch: &Sketch<()>) -> Outline {
    let mp = sketch.to_multipolygon();
    let mut outline = Vec::new();
    for poly in mp.0.iter() {
        let exterior = open_ring(
            poly.exterior()
                .0
                .iter()
                .map(|c| Point::new(c.x, c.y))
                .collect(),
        );
        if exterior.len() < 3 {
            continue;
        }
        let holes = poly
            .interiors()
            .iter()
            .map(|ring| open_ring(ring.0.iter().map(|c| Point::new(c.x, c.y)).collect()))
            .filter(|ring| ring.len() >= 3)
            .collect();
        outline.push(OutlinePolygon { exterior, holes });
    }
    outline
}

fn apply(operation: BooleanOperation, a: &Sketch<()>, b: &Sketch<()>) -> Sketch<()> {
    match operation {
        BooleanOperation::Unite => a.union(b),
        BooleanOperation::Subtract => a.difference(b),
        BooleanOperation::Intersect => a.intersection(b),
        BooleanOperation::Exclude => a.union(b).difference(&a.intersection(b)),
    }
}

/// Folds `operation` over `outlines` left to right.
pub(crate) fn combine(operation: BooleanOperation, outlines: &[&Outline]) -> EditResult<Outline> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut iter = outlines.iter();
        let mut acc = match iter.next() {
            Some(first) => outline_to_sketch(first),
            None => return Vec::new(),
        };
        for next in iter {
            acc = apply(operation, &acc, &outline_to_sketch(next));
        }
        sketch_to_outline(&acc)
    }));

    result.map_err(|_| {
        EditError::geometry(format!("{} failed in polygon algebra", operation.label()))
    })
}
