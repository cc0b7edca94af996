use serde::{Deserialize, Serialize};

/// Summary statistics over one classified event sequence. Every mean over an
/// empty event list reports 0.0 rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GazeMetrics {
    pub fixation_count: usize,
    pub mean_fixation_duration: f64,
    pub total_fixation_time: f64,
    pub saccade_count: usize,
    pub mean_saccade_amplitude: f64,
    pub mean_peak_velocity: f64,
    /// Sum of saccade amplitudes, a proxy for total path length.
    pub total_scanpath_length: f64,
    /// Span from the first event's start to the last event's end, seconds.
    pub scan_duration: f64,
    /// Fixations per second of scan time.
    pub fixation_frequency: f64,
}

impl Default for GazeMetrics {
    fn default() -> Self {
        Self {
            fixation_count: 0,
            mean_fixation_duration: 0.0,
            total_fixation_time: 0.0,
            saccade_count: 0,
            mean_saccade_amplitude: 0.0,
            mean_peak_velocity: 0.0,
            total_scanpath_length: 0.0,
            scan_duration: 0.0,
            fixation_frequency: 0.0,
        }
    }
}
