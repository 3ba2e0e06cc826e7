//! Color-space conversion between hex strings and HSB.
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and brightness in
//! percent `[0, 100]`, matching what the color picker edits.

use crate::error::ColorError;
use crate::geometry::clamp;
use serde::{Deserialize, Serialize};

/// Hue / saturation / brightness triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Hsb {
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }
}

fn parse_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let invalid = || ColorError::InvalidHex {
        value: hex.to_string(),
    };
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Parses `#rgb` / `#rrggbb` (leading `#` optional) into HSB.
pub fn hex_to_hsb(hex: &str) -> Result<Hsb, ColorError> {
    let (r, g, b) = parse_rgb(hex)?;
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Ok(Hsb {
        h: hue.rem_euclid(360.0),
        s: saturation * 100.0,
        b: max * 100.0,
    })
}

/// Formats HSB as a lower-case `#rrggbb` string. Out-of-range inputs are
/// clamped (saturation, brightness) or wrapped (hue).
pub fn hsb_to_hex(hsb: Hsb) -> String {
    let h = hsb.h.rem_euclid(360.0);
    let s = clamp(hsb.s, 0.0, 100.0) / 100.0;
    let v = clamp(hsb.b, 0.0, 100.0) / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_byte = |v: f64| ((v + m) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}
