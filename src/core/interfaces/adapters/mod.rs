mod file_name_composer;
mod metadata_writer;
mod telemetry_source;

pub use file_name_composer::{FileNameComposer, FileNameField};
pub use metadata_writer::MetadataWriter;
pub use telemetry_source::TelemetrySource;
