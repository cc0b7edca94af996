mod types;

pub use types::GazeMetrics;

use crate::detection::{fixations, saccades};
use crate::models::GazeEvent;

/// Reduce an ordered event list to summary statistics.
pub fn aggregate(events: &[GazeEvent]) -> GazeMetrics {
    let mut metrics = GazeMetrics::default();

    let mut fixation_duration_sum = 0.0;
    for fixation in fixations(events) {
        metrics.fixation_count += 1;
        fixation_duration_sum += fixation.duration;
    }

    let mut amplitude_sum = 0.0;
    let mut peak_velocity_sum = 0.0;
    for saccade in saccades(events) {
        metrics.saccade_count += 1;
        amplitude_sum += saccade.amplitude;
        peak_velocity_sum += saccade.peak_velocity;
    }

    metrics.total_fixation_time = fixation_duration_sum;
    metrics.total_scanpath_length = amplitude_sum;

    if metrics.fixation_count > 0 {
        metrics.mean_fixation_duration = fixation_duration_sum / metrics.fixation_count as f64;
    }
    if metrics.saccade_count > 0 {
        metrics.mean_saccade_amplitude = amplitude_sum / metrics.saccade_count as f64;
        metrics.mean_peak_velocity = peak_velocity_sum / metrics.saccade_count as f64;
    }

    if let (Some(first), Some(last)) = (events.first(), events.last()) {
        metrics.scan_duration = last.end_time() - first.start_time();
        if metrics.scan_duration > 0.0 {
            metrics.fixation_frequency = metrics.fixation_count as f64 / metrics.scan_duration;
        }
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fixation, Saccade};

    fn fixation(start: f64, end: f64) -> GazeEvent {
        GazeEvent::Fixation(Fixation {
            start_time: start,
            end_time: end,
            duration: end - start,
            centroid: (0.0, 0.0),
            point_count: 10,
        })
    }

    fn saccade(start: f64, end: f64, amplitude: f64, peak: f64) -> GazeEvent {
        GazeEvent::Saccade(Saccade {
            start_time: start,
            end_time: end,
            duration: end - start,
            start_pos: (0.0, 0.0),
            end_pos: (amplitude, 0.0),
            amplitude,
            peak_velocity: peak,
            mean_velocity: peak / 2.0,
        })
    }

    #[test]
    fn empty_events_produce_a_zeroed_snapshot() {
        let metrics = aggregate(&[]);
        assert_eq!(metrics.fixation_count, 0);
        assert_eq!(metrics.saccade_count, 0);
        assert_eq!(metrics.mean_fixation_duration, 0.0);
        assert_eq!(metrics.mean_saccade_amplitude, 0.0);
        assert_eq!(metrics.fixation_frequency, 0.0);
    }

    #[test]
    fn aggregates_counts_means_and_scanpath() {
        let events = vec![
            fixation(0.0, 0.2),
            saccade(0.2, 0.25, 300.0, 4000.0),
            fixation(0.25, 0.65),
            saccade(0.65, 0.7, 100.0, 2000.0),
            fixation(0.7, 1.0),
        ];

        let metrics = aggregate(&events);
        assert_eq!(metrics.fixation_count, 3);
        assert_eq!(metrics.saccade_count, 2);
        assert!((metrics.mean_fixation_duration - 0.3).abs() < 1e-9);
        assert!((metrics.total_fixation_time - 0.9).abs() < 1e-9);
        assert!((metrics.mean_saccade_amplitude - 200.0).abs() < 1e-9);
        assert!((metrics.mean_peak_velocity - 3000.0).abs() < 1e-9);
        assert!((metrics.total_scanpath_length - 400.0).abs() < 1e-9);
        assert!((metrics.scan_duration - 1.0).abs() < 1e-9);
        assert!((metrics.fixation_frequency - 3.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(GazeMetrics::default()).unwrap();
        assert!(json.get("fixationCount").is_some());
        assert!(json.get("totalScanpathLength").is_some());
        assert!(json.get("fixationFrequency").is_some());
    }
}
