use std::collections::VecDeque;

use chrono::Utc;

use crate::models::{GazePoint, GazeSession, RawSample, RecordingStatus};

/// Number of recent positions kept for the live overlay trail.
const TRAIL_CAPACITY: usize = 25;

/// Per-session store for the smoothed gaze stream.
///
/// Feeds each incoming raw sample through the smoother, buffers the result
/// for offline analysis, and keeps a short trail of recent positions for
/// live overlay rendering. Trial boundaries can be marked so the buffer can
/// later be partitioned into one point-set per image/trial for heatmap
/// jobs.
pub struct GazeRecorder {
    smoothing_factor: f64,
    session: GazeSession,
    points: Vec<GazePoint>,
    trail: VecDeque<(f64, f64)>,
    /// Indices into `points` where a new trial begins.
    trial_starts: Vec<usize>,
}

impl GazeRecorder {
    pub fn new(smoothing_factor: f64) -> Self {
        Self {
            smoothing_factor,
            session: GazeSession::begin(Utc::now()),
            points: Vec::new(),
            trail: VecDeque::with_capacity(TRAIL_CAPACITY),
            trial_starts: vec![0],
        }
    }

    /// Process one raw sample. Returns the new smoothed point, or `None` if
    /// the sample was invalid or recording is stopped.
    pub fn ingest(&mut self, sample: &RawSample) -> Option<GazePoint> {
        if self.session.status != RecordingStatus::Recording {
            return None;
        }

        let point = super::smoother::smooth_sample(
            sample,
            self.points.last(),
            self.smoothing_factor,
        )?;

        if self.trail.len() == TRAIL_CAPACITY {
            self.trail.pop_front();
        }
        self.trail.push_back(point.position);
        self.points.push(point);

        Some(point)
    }

    /// The full buffered sequence, in arrival order.
    pub fn points(&self) -> &[GazePoint] {
        &self.points
    }

    /// Recent smoothed positions, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.trail.iter().copied()
    }

    /// Latest smoothed position, if any sample has been accepted yet.
    pub fn current_gaze(&self) -> Option<(f64, f64)> {
        self.points.last().map(|p| p.position)
    }

    /// Close the current trial; points ingested from now on belong to the
    /// next one. Marking twice without intervening samples yields an empty
    /// trial slice.
    pub fn mark_trial(&mut self) {
        self.trial_starts.push(self.points.len());
    }

    /// The buffered points split at the marked trial boundaries.
    pub fn trial_points(&self) -> Vec<&[GazePoint]> {
        let mut slices = Vec::with_capacity(self.trial_starts.len());
        for (i, &start) in self.trial_starts.iter().enumerate() {
            let end = self
                .trial_starts
                .get(i + 1)
                .copied()
                .unwrap_or(self.points.len());
            slices.push(&self.points[start..end]);
        }
        slices
    }

    pub fn session(&self) -> &GazeSession {
        &self.session
    }

    /// Stop accepting samples. Ingest becomes a no-op until `resume`.
    pub fn stop(&mut self) {
        if self.session.status == RecordingStatus::Recording {
            self.session.status = RecordingStatus::Stopped;
            self.session.stopped_at = Some(Utc::now());
            log::info!(
                "recording stopped for session {} ({} points buffered)",
                self.session.id,
                self.points.len()
            );
        }
    }

    pub fn resume(&mut self) {
        self.session.status = RecordingStatus::Recording;
        self.session.stopped_at = None;
    }

    /// Discard all buffered data and begin a fresh session.
    pub fn reset(&mut self) {
        self.session = GazeSession::begin(Utc::now());
        self.points.clear();
        self.trail.clear();
        self.trial_starts.clear();
        self.trial_starts.push(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(t: f64, x: i32, y: i32) -> RawSample {
        RawSample::new(t, x, y, true)
    }

    #[test]
    fn buffers_valid_samples_and_skips_invalid() {
        let mut recorder = GazeRecorder::new(1.0);
        assert!(recorder.ingest(&sample(0.0, 10, 10)).is_some());
        assert!(recorder
            .ingest(&RawSample::new(0.016, 20, 20, false))
            .is_none());
        assert!(recorder.ingest(&sample(0.032, 30, 30)).is_some());
        assert_eq!(recorder.points().len(), 2);
        assert_eq!(recorder.current_gaze(), Some((30.0, 30.0)));
    }

    #[test]
    fn stop_makes_ingest_a_noop() {
        let mut recorder = GazeRecorder::new(1.0);
        recorder.ingest(&sample(0.0, 10, 10));
        recorder.stop();
        assert!(recorder.ingest(&sample(0.016, 20, 20)).is_none());
        assert_eq!(recorder.points().len(), 1);
        assert_eq!(recorder.session().status, RecordingStatus::Stopped);
        assert!(recorder.session().stopped_at.is_some());

        recorder.resume();
        assert!(recorder.ingest(&sample(0.032, 20, 20)).is_some());
        assert_eq!(recorder.points().len(), 2);
    }

    #[test]
    fn trail_is_bounded() {
        let mut recorder = GazeRecorder::new(1.0);
        for i in 0..100 {
            recorder.ingest(&sample(i as f64 * 0.016, i, i));
        }
        assert_eq!(recorder.trail().count(), TRAIL_CAPACITY);
        // Oldest retained entry is sample 75.
        assert_eq!(recorder.trail().next(), Some((75.0, 75.0)));
    }

    #[test]
    fn trial_boundaries_partition_the_buffer() {
        let mut recorder = GazeRecorder::new(1.0);
        recorder.ingest(&sample(0.0, 1, 1));
        recorder.ingest(&sample(0.016, 2, 2));
        recorder.mark_trial();
        recorder.ingest(&sample(0.032, 3, 3));
        recorder.mark_trial();

        let trials = recorder.trial_points();
        assert_eq!(trials.len(), 3);
        assert_eq!(trials[0].len(), 2);
        assert_eq!(trials[1].len(), 1);
        assert!(trials[2].is_empty());
    }

    #[test]
    fn reset_starts_a_new_session() {
        let mut recorder = GazeRecorder::new(1.0);
        recorder.ingest(&sample(0.0, 1, 1));
        let old_id = recorder.session().id.clone();
        recorder.reset();
        assert!(recorder.points().is_empty());
        assert_eq!(recorder.trial_points().len(), 1);
        assert_ne!(recorder.session().id, old_id);
        assert_eq!(recorder.session().status, RecordingStatus::Recording);
    }
}
