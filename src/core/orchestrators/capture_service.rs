use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::core::encoding;
use crate::core::interfaces::adapters::{FileNameComposer, MetadataWriter, TelemetrySource};
use crate::core::interfaces::ports::{ProcessWindowLocator, ScreenCapturer};
use crate::core::models::{
    profile_for, CaptureError, CaptureRequest, CaptureResult, TelemetryError, TelemetrySnapshot,
};
use crate::global_constants::{
    DEFAULT_TELEMETRY_TIMEOUT_MS, LOG_TAG_CAPTURE, MESSAGE_TARGET_WINDOW_MISSING,
};

pub type CaptureClock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// Runs the capture pipeline: locate the simulator, grab the primary display, encode and
/// write the image, then geotag it.
///
/// Holds no state between calls. Two captures within the same second and with the same
/// templates resolve to the same path, so the second overwrites the first.
pub struct CaptureService {
    screen_capturer: Arc<dyn ScreenCapturer>,
    window_locator: Arc<dyn ProcessWindowLocator>,
    telemetry_source: Arc<dyn TelemetrySource>,
    metadata_writer: Arc<dyn MetadataWriter>,
    file_name_composer: Arc<dyn FileNameComposer>,
    telemetry_timeout: Duration,
    clock: CaptureClock,
}

impl CaptureService {
    pub fn build(
        screen_capturer: Arc<dyn ScreenCapturer>,
        window_locator: Arc<dyn ProcessWindowLocator>,
        telemetry_source: Arc<dyn TelemetrySource>,
        metadata_writer: Arc<dyn MetadataWriter>,
        file_name_composer: Arc<dyn FileNameComposer>,
    ) -> Self {
        Self {
            screen_capturer,
            window_locator,
            telemetry_source,
            metadata_writer,
            file_name_composer,
            telemetry_timeout: Duration::from_millis(DEFAULT_TELEMETRY_TIMEOUT_MS),
            clock: Arc::new(Local::now),
        }
    }

    pub fn with_telemetry_timeout(mut self, telemetry_timeout: Duration) -> Self {
        self.telemetry_timeout = telemetry_timeout;
        self
    }

    pub fn with_clock(mut self, clock: CaptureClock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn capture(&self, request: &CaptureRequest) -> Result<CaptureResult, CaptureError> {
        let capture_time = (self.clock)();
        log::info!(
            "{} capture requested at {} as {}",
            LOG_TAG_CAPTURE,
            capture_time.to_rfc3339(),
            request.image_format
        );

        let output_path = self.resolve_output_path(request, &capture_time)?;
        Self::ensure_target_folder(&request.target_folder)?;

        let target_window_title = self.locate_target_window(request);

        let capture_buffer = self
            .screen_capturer
            .capture_primary_display()
            .map_err(|error| CaptureError::EncodeFailed(format!("{:#}", error)))?;
        log::debug!(
            "{} grabbed {}x{} frame",
            LOG_TAG_CAPTURE,
            capture_buffer.width,
            capture_buffer.height
        );

        encoding::write_capture_to_file(&capture_buffer, request.image_format, &output_path)?;
        log::info!("{} wrote {:?}", LOG_TAG_CAPTURE, output_path);

        let (embedded_snapshot, degradation) = self.embed_telemetry(request, &output_path).await;

        Ok(CaptureResult::new(
            output_path,
            embedded_snapshot,
            target_window_title,
            degradation,
        ))
    }

    pub fn resolve_output_path(
        &self,
        request: &CaptureRequest,
        capture_time: &DateTime<Local>,
    ) -> Result<PathBuf, CaptureError> {
        let date_string = format_capture_time(capture_time, &request.date_template)?;
        let profile = profile_for(request.image_format);

        let file_name = self
            .file_name_composer
            .compose(&request.file_name_template, &date_string, profile.extension)
            .map_err(|error| CaptureError::InvalidRequest(format!("{:#}", error)))?;

        Ok(request.target_folder.join(file_name))
    }

    fn ensure_target_folder(target_folder: &Path) -> Result<(), CaptureError> {
        std::fs::create_dir_all(target_folder).map_err(|error| CaptureError::WriteFailed {
            path: target_folder.to_path_buf(),
            reason: error.to_string(),
        })
    }

    fn locate_target_window(&self, request: &CaptureRequest) -> Option<String> {
        let process_name = request.target_process.as_deref()?;

        let windows = match self.window_locator.find_windows(process_name) {
            Ok(windows) => windows,
            Err(error) => {
                log::warn!("{} {}: {}", LOG_TAG_CAPTURE, MESSAGE_TARGET_WINDOW_MISSING, error);
                return None;
            }
        };

        let Some(window) = windows.first() else {
            log::warn!(
                "{} {}: {} has no visible window",
                LOG_TAG_CAPTURE,
                MESSAGE_TARGET_WINDOW_MISSING,
                process_name
            );
            return None;
        };

        if let Ok(rectangle) = self.window_locator.get_rectangle(window) {
            log::debug!(
                "{} simulator window at ({}, {}) size {}x{}",
                LOG_TAG_CAPTURE,
                rectangle.left,
                rectangle.top,
                rectangle.width(),
                rectangle.height()
            );
        }

        if let Err(error) = self.window_locator.raise_to_foreground(window) {
            log::debug!("{} foreground request failed: {}", LOG_TAG_CAPTURE, error);
        }

        match self.window_locator.get_title(window) {
            Ok(title) => {
                log::info!("{} found simulator window \"{}\"", LOG_TAG_CAPTURE, title);
                Some(title)
            }
            Err(error) => {
                log::warn!("{} simulator window vanished: {}", LOG_TAG_CAPTURE, error);
                None
            }
        }
    }

    async fn resolve_snapshot(
        &self,
        request: &CaptureRequest,
    ) -> Result<TelemetrySnapshot, TelemetryError> {
        if let Some(snapshot) = request.telemetry {
            return Ok(snapshot);
        }

        match tokio::time::timeout(
            self.telemetry_timeout,
            self.telemetry_source.get_current_snapshot(),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(TelemetryError::TimedOut(self.telemetry_timeout)),
        }
    }

    async fn embed_telemetry(
        &self,
        request: &CaptureRequest,
        output_path: &Path,
    ) -> (Option<TelemetrySnapshot>, Option<CaptureError>) {
        let snapshot = match self.resolve_snapshot(request).await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                log::warn!("{} saving without location data: {}", LOG_TAG_CAPTURE, error);
                return (None, Some(CaptureError::TelemetryUnavailable(error)));
            }
        };

        if !snapshot.has_gps_fix() {
            log::info!("{} telemetry has no GPS fix, not geotagging", LOG_TAG_CAPTURE);
            return (None, None);
        }

        match self.metadata_writer.write(&snapshot, output_path) {
            Ok(()) => {
                log::info!("{} geotagged {:?}", LOG_TAG_CAPTURE, output_path);
                (Some(snapshot), None)
            }
            Err(error) => {
                log::error!(
                    "{} metadata write failed for {:?}: {:#}",
                    LOG_TAG_CAPTURE,
                    output_path,
                    error
                );
                (
                    None,
                    Some(CaptureError::MetadataWriteFailed {
                        path: output_path.to_path_buf(),
                        reason: format!("{:#}", error),
                    }),
                )
            }
        }
    }
}

/// Formats `capture_time` with a strftime template, rejecting templates chrono cannot parse.
pub fn format_capture_time(
    capture_time: &DateTime<Local>,
    date_template: &str,
) -> Result<String, CaptureError> {
    let items: Vec<Item> = StrftimeItems::new(date_template).collect();
    if date_template.is_empty() || items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(CaptureError::InvalidRequest(format!(
            "invalid date format '{}'",
            date_template
        )));
    }

    let mut date_string = String::new();
    write!(date_string, "{}", capture_time.format_with_items(items.iter())).map_err(|_| {
        CaptureError::InvalidRequest(format!(
            "date format '{}' cannot be applied to {}",
            date_template, capture_time
        ))
    })?;

    Ok(date_string)
}
