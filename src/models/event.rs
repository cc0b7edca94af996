use serde::{Deserialize, Serialize};

/// A sustained period of low gaze velocity interpreted as visual attention
/// at one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixation {
    pub start_time: f64,
    pub end_time: f64,
    pub duration: f64,
    pub centroid: (f64, f64),
    pub point_count: usize,
}

/// A rapid movement between two fixations, or between a fixation and a
/// sequence boundary. Amplitude is the straight-line distance between the
/// start and end positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Saccade {
    pub start_time: f64,
    pub end_time: f64,
    pub duration: f64,
    pub start_pos: (f64, f64),
    pub end_pos: (f64, f64),
    pub amplitude: f64,
    pub peak_velocity: f64,
    pub mean_velocity: f64,
}

/// One classified gaze event. Events produced by detection are temporally
/// ordered and non-overlapping; together they cover the classified span
/// exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum GazeEvent {
    Fixation(Fixation),
    Saccade(Saccade),
}

impl GazeEvent {
    pub fn start_time(&self) -> f64 {
        match self {
            GazeEvent::Fixation(f) => f.start_time,
            GazeEvent::Saccade(s) => s.start_time,
        }
    }

    pub fn end_time(&self) -> f64 {
        match self {
            GazeEvent::Fixation(f) => f.end_time,
            GazeEvent::Saccade(s) => s.end_time,
        }
    }

    pub fn duration(&self) -> f64 {
        match self {
            GazeEvent::Fixation(f) => f.duration,
            GazeEvent::Saccade(s) => s.duration,
        }
    }

    pub fn as_fixation(&self) -> Option<&Fixation> {
        match self {
            GazeEvent::Fixation(f) => Some(f),
            GazeEvent::Saccade(_) => None,
        }
    }

    pub fn as_saccade(&self) -> Option<&Saccade> {
        match self {
            GazeEvent::Saccade(s) => Some(s),
            GazeEvent::Fixation(_) => None,
        }
    }
}
