use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RecordingStatus {
    Recording,
    Stopped,
}

impl RecordingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordingStatus::Recording => "Recording",
            RecordingStatus::Stopped => "Stopped",
        }
    }
}

/// Wall-clock bookkeeping for one recording session. The sample buffer
/// itself lives in the recorder; this is the metadata handed outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GazeSession {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub stopped_at: Option<DateTime<Utc>>,
    pub status: RecordingStatus,
}

impl GazeSession {
    pub fn begin(now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: now,
            stopped_at: None,
            status: RecordingStatus::Recording,
        }
    }
}
