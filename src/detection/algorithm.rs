use crate::detection::config::DetectionConfig;
use crate::detection::merge::absorb_short_fixations;
use crate::models::{distance, Fixation, GazeEvent, GazePoint, Saccade};

/// A maximal run of consecutive points on the same side of the velocity
/// threshold. Indices are inclusive into the point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub low: bool,
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn duration(&self, points: &[GazePoint]) -> f64 {
        points[self.end].timestamp - points[self.start].timestamp
    }
}

/// Segment a time-ordered smoothed point sequence into fixations and
/// saccades by velocity thresholding (I-VT).
///
/// The caller must supply a timestamp-sorted sequence; ordering is not
/// checked here. Output events are temporally ordered, non-overlapping, and
/// cover the span from the first to the last point exactly once.
pub fn detect_events(points: &[GazePoint], config: &DetectionConfig) -> Vec<GazeEvent> {
    // A single point carries no usable velocity or duration.
    if points.len() < 2 {
        return Vec::new();
    }

    let runs = label_runs(points, config.velocity_threshold);
    let runs = absorb_short_fixations(runs, points, config);

    let mut events = Vec::with_capacity(runs.len());
    for (i, run) in runs.iter().enumerate() {
        if run.low {
            events.push(GazeEvent::Fixation(build_fixation(run, points)));
        } else {
            let before = runs[..i].iter().rev().find(|r| r.low);
            let after = runs[i + 1..].iter().find(|r| r.low);
            events.push(GazeEvent::Saccade(build_saccade(
                run, before, after, points,
            )));
        }
    }
    events
}

/// Group consecutive points into maximal low/high velocity runs.
pub fn label_runs(points: &[GazePoint], velocity_threshold: f64) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for (i, point) in points.iter().enumerate() {
        let low = point.velocity < velocity_threshold;
        match runs.last_mut() {
            Some(run) if run.low == low => run.end = i,
            _ => runs.push(Run {
                low,
                start: i,
                end: i,
            }),
        }
    }

    runs
}

fn build_fixation(run: &Run, points: &[GazePoint]) -> Fixation {
    let members = &points[run.start..=run.end];
    let start_time = members[0].timestamp;
    let end_time = members[members.len() - 1].timestamp;

    Fixation {
        start_time,
        end_time,
        duration: end_time - start_time,
        centroid: centroid(members),
        point_count: members.len(),
    }
}

/// Boundary policy: a saccade bounded by a fixation adopts that fixation's
/// end/start time and centroid on the bounded side, which makes events
/// partition the classified span exactly. At a sequence boundary it falls
/// back to the run's own first/last point.
fn build_saccade(
    run: &Run,
    before: Option<&Run>,
    after: Option<&Run>,
    points: &[GazePoint],
) -> Saccade {
    let members = &points[run.start..=run.end];

    let (start_time, start_pos) = match before {
        Some(fix) => (points[fix.end].timestamp, centroid(&points[fix.start..=fix.end])),
        None => (members[0].timestamp, members[0].position),
    };
    let (end_time, end_pos) = match after {
        Some(fix) => (
            points[fix.start].timestamp,
            centroid(&points[fix.start..=fix.end]),
        ),
        None => (
            members[members.len() - 1].timestamp,
            members[members.len() - 1].position,
        ),
    };

    let peak_velocity = members.iter().map(|p| p.velocity).fold(0.0, f64::max);
    let mean_velocity =
        members.iter().map(|p| p.velocity).sum::<f64>() / members.len() as f64;

    Saccade {
        start_time,
        end_time,
        duration: end_time - start_time,
        start_pos,
        end_pos,
        amplitude: distance(start_pos, end_pos),
        peak_velocity,
        mean_velocity,
    }
}

fn centroid(points: &[GazePoint]) -> (f64, f64) {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.position.0, sy + p.position.1));
    (sx / n, sy / n)
}
