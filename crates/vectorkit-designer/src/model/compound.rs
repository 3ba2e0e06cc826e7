use serde::{Deserialize, Serialize};

use super::{Outline, ShapeId, ShapeType};

/// Set operation applied left to right across a compound's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanOperation {
    Unite,
    Subtract,
    Intersect,
    Exclude,
}

impl BooleanOperation {
    pub fn label(&self) -> &'static str {
        match self {
            BooleanOperation::Unite => "Union",
            BooleanOperation::Subtract => "Subtract",
            BooleanOperation::Intersect => "Intersect",
            BooleanOperation::Exclude => "Exclude",
        }
    }
}

/// Member geometry frozen at the moment it was absorbed into a compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrozenShape {
    pub id: ShapeId,
    pub shape_type: ShapeType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub color: Option<String>,
    /// Polygon approximation in document space
    pub outline: Outline,
}

/// Non-destructive boolean state carried by a compound record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundMeta {
    pub operation: BooleanOperation,
    pub children_data: Vec<FrozenShape>,
}
