mod exif_metadata_writer;
mod http_telemetry_source;
mod template_file_name_composer;

pub use exif_metadata_writer::ExifMetadataWriter;
pub use http_telemetry_source::{DisconnectedTelemetrySource, HttpTelemetrySource};
pub use template_file_name_composer::TemplateFileNameComposer;
