use serde::{Deserialize, Serialize};

use crate::heatmap::colormap::ColorGrid;
use crate::heatmap::density::DensityMap;

/// Lifecycle of one density job. Transitions are monotonic: a job never
/// moves backwards from Done or Failed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum JobStatus {
    Pending,
    Running,
    Done,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Failed)
    }
}

/// One submitted point-set and its results. Owned exclusively by the
/// engine; consumers receive cloned snapshots.
#[derive(Debug, Clone)]
pub struct HeatmapJob {
    pub id: String,
    pub status: JobStatus,
    pub density_map: Option<DensityMap>,
    pub rendered: Option<ColorGrid>,
}

impl HeatmapJob {
    pub fn pending(id: String) -> Self {
        Self {
            id,
            status: JobStatus::Pending,
            density_map: None,
            rendered: None,
        }
    }
}
