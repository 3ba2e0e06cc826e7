use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Raster filter kinds understood by the filter pixel collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    Blur,
    Brighten,
    Contrast,
    Grayscale,
    Hsl,
    Invert,
    Noise,
    Pixelate,
    Posterize,
    Sepia,
    Threshold,
    Emboss,
    Enhance,
    Solarize,
}

impl FilterType {
    pub const ALL: [FilterType; 14] = [
        FilterType::Blur,
        FilterType::Brighten,
        FilterType::Contrast,
        FilterType::Grayscale,
        FilterType::Hsl,
        FilterType::Invert,
        FilterType::Noise,
        FilterType::Pixelate,
        FilterType::Posterize,
        FilterType::Sepia,
        FilterType::Threshold,
        FilterType::Emboss,
        FilterType::Enhance,
        FilterType::Solarize,
    ];

    /// Default parameter bag for a freshly added filter of this type.
    pub fn default_params(&self) -> Map<String, Value> {
        let value = match self {
            FilterType::Blur => json!({ "radius": 10 }),
            FilterType::Brighten => json!({ "brightness": 0.2 }),
            FilterType::Contrast => json!({ "contrast": 20 }),
            FilterType::Hsl => json!({ "hue": 0, "saturation": 0, "luminance": 0 }),
            FilterType::Noise => json!({ "noise": 0.3 }),
            FilterType::Pixelate => json!({ "pixel_size": 8 }),
            FilterType::Posterize => json!({ "levels": 0.5 }),
            FilterType::Threshold => json!({ "threshold": 0.5 }),
            FilterType::Emboss => json!({
                "strength": 0.5,
                "white_level": 0.5,
                "direction": "top-left",
                "blend": false
            }),
            FilterType::Enhance => json!({ "enhance": 0.4 }),
            FilterType::Grayscale
            | FilterType::Invert
            | FilterType::Sepia
            | FilterType::Solarize => json!({}),
        };
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

/// A filter descriptor. The store never holds computed pixels, only these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub id: String,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub enabled: bool,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl Filter {
    pub fn new(id: impl Into<String>, filter_type: FilterType) -> Self {
        Self {
            id: id.into(),
            filter_type,
            enabled: true,
            params: filter_type.default_params(),
        }
    }

    pub fn param_f64(&self, key: &str) -> Option<f64> {
        self.params.get(key).and_then(Value::as_f64)
    }
}
