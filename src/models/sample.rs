use serde::{Deserialize, Serialize};

/// One sample as delivered by the eye-tracker callback. Coordinates are
/// screen pixels; the timestamp is the device's monotonic clock in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSample {
    pub timestamp: f64,
    pub x: i32,
    pub y: i32,
    pub valid: bool,
}

impl RawSample {
    pub fn new(timestamp: f64, x: i32, y: i32, valid: bool) -> Self {
        Self {
            timestamp,
            x,
            y,
            valid,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

/// A smoothed gaze point with its estimated velocity in pixels/second.
/// Velocity is always finite and non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GazePoint {
    pub timestamp: f64,
    pub position: (f64, f64),
    pub velocity: f64,
}

/// Euclidean distance between two screen positions.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}
