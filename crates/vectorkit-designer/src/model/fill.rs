use serde::{Deserialize, Serialize};
use vectorkit_core::Point;

/// Shape fill, discriminated by `fill_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fill_type", rename_all = "snake_case")]
pub enum Fill {
    Solid { color: String },
    Gradient(GradientFill),
    Image(ImageFill),
}

impl Fill {
    pub fn solid(color: impl Into<String>) -> Self {
        Fill::Solid {
            color: color.into(),
        }
    }

    /// The representative color: the solid color, or the first gradient stop.
    pub fn primary_color(&self) -> Option<&str> {
        match self {
            Fill::Solid { color } => Some(color),
            Fill::Gradient(g) => g.stops.first().map(|s| s.color.as_str()),
            Fill::Image(_) => None,
        }
    }
}

impl Default for Fill {
    fn default() -> Self {
        Fill::solid("#d9d9d9")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientType {
    Linear,
    Radial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient, 0..=1
    pub offset: f64,
    pub color: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientFill {
    pub gradient_type: GradientType,
    pub stops: Vec<GradientStop>,
    /// Anchor points in shape-local unit space (0..=1 on both axes)
    pub start: Point,
    pub end: Point,
}

impl GradientFill {
    /// Two-stop linear gradient running left to right.
    pub fn linear(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            gradient_type: GradientType::Linear,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from.into(),
                    opacity: 1.0,
                },
                GradientStop {
                    offset: 1.0,
                    color: to.into(),
                    opacity: 1.0,
                },
            ],
            start: Point::new(0.0, 0.5),
            end: Point::new(1.0, 0.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    Fill,
    Fit,
    Crop,
    Tile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFill {
    /// Opaque reference resolved by the rendering collaborator
    pub src: String,
    pub fit: ImageFit,
}
