use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    DropShadow,
    LayerBlur,
    BackgroundBlur,
    Noise,
}

/// Layer-level visual effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    DropShadow {
        visible: bool,
        offset_x: f64,
        offset_y: f64,
        blur: f64,
        spread: f64,
        color: String,
        opacity: f64,
    },
    LayerBlur {
        visible: bool,
        radius: f64,
    },
    BackgroundBlur {
        visible: bool,
        radius: f64,
    },
    Noise {
        visible: bool,
        amount: f64,
    },
}

impl Effect {
    pub fn default_for(effect_type: EffectType) -> Self {
        match effect_type {
            EffectType::DropShadow => Effect::DropShadow {
                visible: true,
                offset_x: 0.0,
                offset_y: 4.0,
                blur: 4.0,
                spread: 0.0,
                color: "#000000".to_string(),
                opacity: 0.25,
            },
            EffectType::LayerBlur => Effect::LayerBlur {
                visible: true,
                radius: 4.0,
            },
            EffectType::BackgroundBlur => Effect::BackgroundBlur {
                visible: true,
                radius: 4.0,
            },
            EffectType::Noise => Effect::Noise {
                visible: true,
                amount: 0.1,
            },
        }
    }

    pub fn effect_type(&self) -> EffectType {
        match self {
            Effect::DropShadow { .. } => EffectType::DropShadow,
            Effect::LayerBlur { .. } => EffectType::LayerBlur,
            Effect::BackgroundBlur { .. } => EffectType::BackgroundBlur,
            Effect::Noise { .. } => EffectType::Noise,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Effect::DropShadow { visible, .. }
            | Effect::LayerBlur { visible, .. }
            | Effect::BackgroundBlur { visible, .. }
            | Effect::Noise { visible, .. } => *visible,
        }
    }

    pub fn set_visible(&mut self, value: bool) {
        match self {
            Effect::DropShadow { visible, .. }
            | Effect::LayerBlur { visible, .. }
            | Effect::BackgroundBlur { visible, .. }
            | Effect::Noise { visible, .. } => *visible = value,
        }
    }
}
