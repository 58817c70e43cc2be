use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocatorError {
    #[error("process name must not be empty")]
    InvalidProcessName,

    #[error("could not find a running process named '{0}'")]
    ProcessNotFound(String),

    #[error("window {0} no longer exists")]
    WindowNoLongerExists(u32),

    #[error("window enumeration failed: {0}")]
    Enumeration(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TelemetryError {
    #[error("simulator not connected: {0}")]
    NotConnected(String),

    #[error("simulator returned invalid data: {0}")]
    InvalidData(String),

    #[error("simulator did not answer within {0:?}")]
    TimedOut(Duration),
}

/// Outcome taxonomy of a capture.
///
/// `EncodeFailed`, `WriteFailed` and `InvalidRequest` abort the capture. `TelemetryUnavailable`
/// and `MetadataWriteFailed` only ever appear as the degradation of a successful result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CaptureError {
    #[error("could not produce an image: {0}")]
    EncodeFailed(String),

    #[error("could not write {path:?}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("location data unavailable: {0}")]
    TelemetryUnavailable(#[from] TelemetryError),

    #[error("could not write location data to {path:?}: {reason}")]
    MetadataWriteFailed { path: PathBuf, reason: String },

    #[error("invalid capture request: {0}")]
    InvalidRequest(String),
}

impl CaptureError {
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            CaptureError::TelemetryUnavailable(_) | CaptureError::MetadataWriteFailed { .. }
        )
    }
}
