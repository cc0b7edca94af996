pub mod algorithm;
pub mod config;
pub mod merge;

pub use algorithm::detect_events;
pub use config::DetectionConfig;

use crate::models::{Fixation, GazeEvent, Saccade};

/// The fixations within an ordered event list.
pub fn fixations(events: &[GazeEvent]) -> impl Iterator<Item = &Fixation> {
    events.iter().filter_map(GazeEvent::as_fixation)
}

/// The saccades within an ordered event list.
pub fn saccades(events: &[GazeEvent]) -> impl Iterator<Item = &Saccade> {
    events.iter().filter_map(GazeEvent::as_saccade)
}
