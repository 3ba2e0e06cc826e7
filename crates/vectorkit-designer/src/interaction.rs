//! Keyboard interaction state that spans more than one key press.

use vectorkit_core::constants::OPACITY_DOUBLE_TAP_MS;

/// Tracks the `0` key for the opacity shortcut.
///
/// Digits `1`-`9` set opacity to 10%-90%. A single `0` sets 100%, and a
/// second `0` within the double-tap window sets 0%. Timestamps are caller
/// supplied milliseconds so the session stays deterministic.
#[derive(Debug, Clone)]
pub struct InteractionSession {
    last_zero_at: Option<u64>,
    double_tap_ms: u64,
}

impl Default for InteractionSession {
    fn default() -> Self {
        Self::new(OPACITY_DOUBLE_TAP_MS)
    }
}

impl InteractionSession {
    pub fn new(double_tap_ms: u64) -> Self {
        Self {
            last_zero_at: None,
            double_tap_ms,
        }
    }

    /// Opacity (0.0..=1.0) requested by `key`, if it is an opacity key.
    pub fn opacity_for_key(&mut self, key: char, now_ms: u64) -> Option<f64> {
        let digit = key.to_digit(10)?;
        if digit != 0 {
            self.last_zero_at = None;
            return Some(f64::from(digit) / 10.0);
        }
        match self.last_zero_at.take() {
            Some(prev) if now_ms.saturating_sub(prev) <= self.double_tap_ms => Some(0.0),
            _ => {
                self.last_zero_at = Some(now_ms);
                Some(1.0)
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_zero_at = None;
    }
}
