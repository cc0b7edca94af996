use serde::{Deserialize, Serialize};

/// Configuration for the I-VT event detector with tunable thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionConfig {
    /// Velocity boundary between fixation and saccade samples (pixels/second).
    pub velocity_threshold: f64,

    /// Low-velocity runs shorter than this are folded into the surrounding
    /// saccade motion instead of becoming fixations (seconds).
    pub min_fixation_duration: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: 300.0,
            min_fixation_duration: 0.1,
        }
    }
}
