//! Editor-wide constants.

/// Smallest width or height a frame can be resized to, in document units.
pub const MIN_FRAME_SIZE: f64 = 200.0;

/// Fraction of a hierarchy row (from the left) that keeps reorder semantics
/// when hovering a container. The rest of the row means "drop inside".
pub const DROP_ZONE_SPLIT: f64 = 0.4;

/// Number of segments used to approximate a circle outline.
pub const CIRCLE_SEGMENTS: usize = 32;

/// Default number of spikes on a star (two vertices per spike).
pub const STAR_POINTS: u32 = 5;

/// Default inner/outer radius ratio of a star.
pub const STAR_INNER_RATIO: f64 = 0.5;

/// Maximum delay between two `0` key presses to count as a double tap.
pub const OPACITY_DOUBLE_TAP_MS: u64 = 300;

/// Areas below this are treated as empty geometry.
pub const AREA_EPSILON: f64 = 1e-6;

/// Default document background color.
pub const DEFAULT_BACKGROUND: &str = "#f5f5f5";
