//! Gaze analysis core: smooths raw eye-tracker samples into a velocity-
//! annotated point stream, segments buffered sessions into fixations and
//! saccades (I-VT), aggregates summary metrics, and builds normalized gaze
//! density heatmaps on a background worker pool.
//!
//! Rendering, task sequencing, and persistence are the consumer's concern;
//! this crate only hands back structured in-memory results.

pub mod detection;
pub mod heatmap;
pub mod ingest;
pub mod metrics;
pub mod models;
pub mod utils;

pub use detection::{detect_events, DetectionConfig};
pub use heatmap::{HeatmapConfig, HeatmapEngine, JobStatus};
pub use ingest::{smooth_sample, GazeRecorder};
pub use metrics::{aggregate, GazeMetrics};
pub use models::{Fixation, GazeEvent, GazePoint, RawSample, Saccade};
