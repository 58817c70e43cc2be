mod capture_buffer;
mod capture_error;
mod capture_request;
mod image_format;
mod telemetry_snapshot;
mod user_settings;
mod window_handle;

pub use capture_buffer::CaptureBuffer;
pub use capture_error::{CaptureError, LocatorError, TelemetryError};
pub use capture_request::{CaptureOutcome, CaptureRequest, CaptureResult};
pub use image_format::{profile_for, FormatProfile, ImageFormat};
pub use telemetry_snapshot::TelemetrySnapshot;
pub use user_settings::UserSettings;
pub use window_handle::{WindowHandle, WindowRectangle};
