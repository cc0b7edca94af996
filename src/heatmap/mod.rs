pub mod colormap;
pub mod config;
pub mod density;
pub mod engine;
pub mod job;

pub use colormap::{intensity_to_color, render_color_grid, ColorGrid, Rgba};
pub use config::HeatmapConfig;
pub use density::{build_density_map, DensityMap};
pub use engine::{EnginePhase, HeatmapEngine};
pub use job::{HeatmapJob, JobStatus};
