use serde::{Deserialize, Serialize};

/// Configuration for density-map construction with tunable resolution and
/// smoothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapConfig {
    /// Edge length of one grid cell in screen pixels.
    pub cell_size: u32,

    /// Standard deviation of the per-point Gaussian kernel, in grid cells.
    pub sigma: f64,

    /// Size of the fixed worker pool for background density jobs.
    pub worker_count: usize,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            cell_size: 2,
            sigma: 25.0,
            worker_count: 4,
        }
    }
}
