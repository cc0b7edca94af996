pub mod event;
pub mod sample;
pub mod session;

pub use event::{Fixation, GazeEvent, Saccade};
pub use sample::{distance, GazePoint, RawSample};
pub use session::{GazeSession, RecordingStatus};
