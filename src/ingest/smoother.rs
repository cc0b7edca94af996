use crate::models::{distance, GazePoint, RawSample};

/// Floor on the elapsed time used for velocity estimation. Two samples
/// sharing a timestamp must not produce an infinite velocity.
pub const MIN_DT_SECS: f64 = 1e-6;

/// Smooth one raw sample against the previous smoothed point and estimate
/// its velocity.
///
/// Invalid samples are dropped (`None`); the caller keeps `previous` as-is,
/// so the next valid sample computes its velocity across the true elapsed
/// gap rather than against the dropped sample. The first valid sample of a
/// stream passes through unsmoothed with velocity 0.
///
/// `smoothing_factor` is the exponential filter weight in (0, 1]; 1.0
/// disables smoothing entirely.
pub fn smooth_sample(
    sample: &RawSample,
    previous: Option<&GazePoint>,
    smoothing_factor: f64,
) -> Option<GazePoint> {
    if !sample.valid {
        return None;
    }

    let raw = sample.position();

    let Some(prev) = previous else {
        return Some(GazePoint {
            timestamp: sample.timestamp,
            position: raw,
            velocity: 0.0,
        });
    };

    let (px, py) = prev.position;
    let smoothed = (
        px + (raw.0 - px) * smoothing_factor,
        py + (raw.1 - py) * smoothing_factor,
    );

    let dt = (sample.timestamp - prev.timestamp).max(MIN_DT_SECS);
    let velocity = distance(smoothed, prev.position) / dt;

    Some(GazePoint {
        timestamp: sample.timestamp,
        position: smoothed,
        velocity,
    })
}
