use std::sync::Arc;

use crate::adapters::{
    DisconnectedTelemetrySource, ExifMetadataWriter, HttpTelemetrySource,
    TemplateFileNameComposer,
};
use crate::core::interfaces::adapters::TelemetrySource;
use crate::core::models::{
    CaptureError, CaptureOutcome, CaptureRequest, CaptureResult, ImageFormat, UserSettings,
};
use crate::core::orchestrators::CaptureService;
use crate::global_constants::{
    LOG_TAG_MAIN, MESSAGE_CAPTURE_FAILED, MESSAGE_CAPTURE_METADATA_FAILED, MESSAGE_CAPTURE_SAVED,
    MESSAGE_CAPTURE_UNTAGGED,
};
use crate::ports::{SystemProcessWindowLocator, XcapScreenCapturer};

pub struct GeoshotApp {
    capture_service: CaptureService,
    settings: UserSettings,
}

impl GeoshotApp {
    pub fn build(settings: UserSettings) -> Self {
        log::info!("[APP] Initializing application");

        let capture_service = CaptureService::build(
            Arc::new(XcapScreenCapturer::initialize()),
            Arc::new(SystemProcessWindowLocator::initialize()),
            Self::build_telemetry_source(&settings),
            Arc::new(ExifMetadataWriter::new()),
            Arc::new(TemplateFileNameComposer::new()),
        )
        .with_telemetry_timeout(settings.telemetry_timeout());

        Self {
            capture_service,
            settings,
        }
    }

    fn build_telemetry_source(settings: &UserSettings) -> Arc<dyn TelemetrySource> {
        let Some(endpoint_url) = settings.telemetry_url.clone() else {
            log::info!("[APP] No telemetry endpoint configured, screenshots will not be geotagged");
            return Arc::new(DisconnectedTelemetrySource);
        };

        match HttpTelemetrySource::build(endpoint_url, settings.telemetry_timeout()) {
            Ok(source) => Arc::new(source),
            Err(error) => {
                log::warn!("[APP] Telemetry disabled: {:#}", error);
                Arc::new(DisconnectedTelemetrySource)
            }
        }
    }

    pub async fn take_screenshot(
        &self,
        format_override: Option<ImageFormat>,
    ) -> Result<CaptureResult, CaptureError> {
        let mut request = CaptureRequest::from_settings(&self.settings);
        if let Some(image_format) = format_override {
            request = request.with_format(image_format);
        }

        self.capture_service.capture(&request).await
    }
}

/// Logs a terminal capture state; every outcome gets its own message.
pub fn report_outcome(result: &Result<CaptureResult, CaptureError>) {
    match result {
        Ok(capture) => {
            if let Some(title) = capture.target_window_title() {
                log::info!("{} captured while \"{}\" was running", LOG_TAG_MAIN, title);
            }
            report_capture(capture);
        }
        Err(error) if error.is_fatal() => {
            log::error!("{} {}: {}", LOG_TAG_MAIN, MESSAGE_CAPTURE_FAILED, error)
        }
        Err(error) => log::warn!("{} {}", LOG_TAG_MAIN, error),
    }
}

fn report_capture(capture: &CaptureResult) {
    match capture.outcome() {
        CaptureOutcome::Geotagged => {
            log::info!(
                "{} {}: {:?}",
                LOG_TAG_MAIN,
                MESSAGE_CAPTURE_SAVED,
                capture.output_path()
            );
            if let Some(maps_url) = capture.embedded_snapshot().and_then(|s| s.maps_url()) {
                log::info!("{} location: {}", LOG_TAG_MAIN, maps_url);
            }
        }
        CaptureOutcome::Untagged => {
            log::warn!(
                "{} {}: {:?}",
                LOG_TAG_MAIN,
                MESSAGE_CAPTURE_UNTAGGED,
                capture.output_path()
            );
            if let Some(reason) = capture.degradation() {
                log::warn!("{} {}", LOG_TAG_MAIN, reason);
            }
        }
        CaptureOutcome::MetadataFailed => {
            log::warn!(
                "{} {}: {:?}",
                LOG_TAG_MAIN,
                MESSAGE_CAPTURE_METADATA_FAILED,
                capture.output_path()
            );
            if let Some(reason) = capture.degradation() {
                log::warn!("{} {}", LOG_TAG_MAIN, reason);
            }
        }
    }
}
