use std::path::{Path, PathBuf};

use super::{CaptureError, ImageFormat, TelemetrySnapshot, UserSettings};

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRequest {
    pub target_folder: PathBuf,
    pub image_format: ImageFormat,
    pub file_name_template: String,
    pub date_template: String,
    pub telemetry: Option<TelemetrySnapshot>,
    pub target_process: Option<String>,
}

impl CaptureRequest {
    pub fn from_settings(settings: &UserSettings) -> Self {
        Self {
            target_folder: settings.screenshot_folder.clone(),
            image_format: settings.image_format,
            file_name_template: settings.file_name_format.clone(),
            date_template: settings.date_format.clone(),
            telemetry: None,
            target_process: Some(settings.target_process_name.clone())
                .filter(|name| !name.trim().is_empty()),
        }
    }

    #[cfg(test)]
    pub fn with_telemetry(mut self, snapshot: TelemetrySnapshot) -> Self {
        self.telemetry = Some(snapshot);
        self
    }

    pub fn with_format(mut self, image_format: ImageFormat) -> Self {
        self.image_format = image_format;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Geotagged,
    Untagged,
    MetadataFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureResult {
    output_path: PathBuf,
    embedded_snapshot: Option<TelemetrySnapshot>,
    target_window_title: Option<String>,
    degradation: Option<CaptureError>,
}

impl CaptureResult {
    pub(crate) fn new(
        output_path: PathBuf,
        embedded_snapshot: Option<TelemetrySnapshot>,
        target_window_title: Option<String>,
        degradation: Option<CaptureError>,
    ) -> Self {
        Self {
            output_path,
            embedded_snapshot,
            target_window_title,
            degradation,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn embedded_snapshot(&self) -> Option<&TelemetrySnapshot> {
        self.embedded_snapshot.as_ref()
    }

    pub fn target_window_title(&self) -> Option<&str> {
        self.target_window_title.as_deref()
    }

    pub fn degradation(&self) -> Option<&CaptureError> {
        self.degradation.as_ref()
    }

    pub fn outcome(&self) -> CaptureOutcome {
        match (&self.embedded_snapshot, &self.degradation) {
            (_, Some(CaptureError::MetadataWriteFailed { .. })) => CaptureOutcome::MetadataFailed,
            (Some(_), _) => CaptureOutcome::Geotagged,
            (None, _) => CaptureOutcome::Untagged,
        }
    }
}
