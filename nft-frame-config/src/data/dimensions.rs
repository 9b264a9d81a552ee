use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Width and height of an NFT, in CSS pixels.
///
/// Ordering between `min` and `max` is checked by the sizing engine, not here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the reason these dimensions are unusable, if any.
    pub fn invalid_reason(&self) -> Option<String> {
        for (side, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() {
                return Some(format!("{side} is not finite"));
            }
            if value < 0.0 {
                return Some(format!("{side} is negative ({value})"));
            }
        }
        None
    }
}

/// A duration expressed as `{ "milliseconds": n }`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoadWaitDuration {
    pub milliseconds: u64,
}

impl LoadWaitDuration {
    pub fn as_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.milliseconds)
    }
}
