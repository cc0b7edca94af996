use crate::detection::algorithm::Run;
use crate::detection::config::DetectionConfig;
use crate::models::GazePoint;

/// Fold low-velocity runs that are too short to count as fixations into the
/// surrounding saccade motion.
///
/// Every low run below `min_fixation_duration` is relabeled as saccade
/// motion, then adjacent same-label runs are coalesced so the result
/// alternates strictly between fixation and saccade runs. This is what
/// keeps sensor noise from producing spurious micro-fixations.
pub fn absorb_short_fixations(
    mut runs: Vec<Run>,
    points: &[GazePoint],
    config: &DetectionConfig,
) -> Vec<Run> {
    for run in &mut runs {
        if run.low && run.duration(points) < config.min_fixation_duration {
            run.low = false;
        }
    }

    coalesce(runs)
}

/// Merge adjacent runs that carry the same label into single spans.
fn coalesce(runs: Vec<Run>) -> Vec<Run> {
    let mut result: Vec<Run> = Vec::with_capacity(runs.len());

    for run in runs {
        match result.last_mut() {
            Some(prev) if prev.low == run.low => prev.end = run.end,
            _ => result.push(run),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::algorithm::label_runs;

    fn point(t: f64, velocity: f64) -> GazePoint {
        GazePoint {
            timestamp: t,
            position: (0.0, 0.0),
            velocity,
        }
    }

    fn config() -> DetectionConfig {
        DetectionConfig {
            velocity_threshold: 500.0,
            min_fixation_duration: 0.1,
        }
    }

    #[test]
    fn short_low_run_is_folded_into_surrounding_saccade() {
        // high(2) low(2, ~0.016s) high(2): the brief dip disappears.
        let velocities = [900.0, 900.0, 10.0, 10.0, 900.0, 900.0];
        let points: Vec<GazePoint> = velocities
            .iter()
            .enumerate()
            .map(|(i, &v)| point(i as f64 * 0.016, v))
            .collect();

        let runs = label_runs(&points, 500.0);
        assert_eq!(runs.len(), 3);

        let merged = absorb_short_fixations(runs, &points, &config());
        assert_eq!(merged.len(), 1);
        assert!(!merged[0].low);
        assert_eq!((merged[0].start, merged[0].end), (0, 5));
    }

    #[test]
    fn long_low_run_survives() {
        let mut points = Vec::new();
        for i in 0..3 {
            points.push(point(i as f64 * 0.016, 900.0));
        }
        for i in 3..20 {
            points.push(point(i as f64 * 0.016, 10.0));
        }

        let runs = label_runs(&points, 500.0);
        let merged = absorb_short_fixations(runs, &points, &config());
        assert_eq!(merged.len(), 2);
        assert!(!merged[0].low);
        assert!(merged[1].low);
    }
}
