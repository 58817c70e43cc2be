use anyhow::Result;

use crate::core::models::CaptureBuffer;

pub trait ScreenCapturer: Send + Sync {
    /// Grabs one full frame of the primary display.
    fn capture_primary_display(&self) -> Result<CaptureBuffer>;
}
