use anyhow::Result;
use std::path::Path;

use crate::core::models::TelemetrySnapshot;

/// Embeds telemetry into an image file that already exists on disk, leaving pixel data alone.
pub trait MetadataWriter: Send + Sync {
    fn write(&self, snapshot: &TelemetrySnapshot, file_path: &Path) -> Result<()>;
}
