pub mod recorder;
pub mod smoother;

pub use recorder::GazeRecorder;
pub use smoother::smooth_sample;
