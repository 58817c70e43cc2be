use anyhow::{bail, Result};
use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;
use little_exif::rational::uR64;
use std::path::Path;

use crate::core::interfaces::adapters::MetadataWriter;
use crate::core::models::TelemetrySnapshot;
use crate::global_constants::{KNOTS_TO_KILOMETERS_PER_HOUR, LOG_TAG_EXIF};

const SECOND_FRACTION_DENOMINATOR: u32 = 10_000;
const DECIMAL_DENOMINATOR: u32 = 100;
const GPS_SPEED_REF_KILOMETERS_PER_HOUR: &str = "K";
const GPS_ALTITUDE_ABOVE_SEA_LEVEL: u8 = 0;
const GPS_ALTITUDE_BELOW_SEA_LEVEL: u8 = 1;

/// Writes the snapshot as EXIF GPS tags. Works on PNG, JPEG and TIFF files.
pub struct ExifMetadataWriter;

impl ExifMetadataWriter {
    pub fn new() -> Self {
        Self
    }

    fn build_gps_tags(snapshot: &TelemetrySnapshot) -> Vec<ExifTag> {
        let mut tags = Vec::new();

        if let Some(latitude) = snapshot.latitude {
            let reference = if latitude < 0.0 { "S" } else { "N" };
            tags.push(ExifTag::GPSLatitudeRef(reference.to_string()));
            tags.push(ExifTag::GPSLatitude(degrees_to_rationals(latitude)));
        }

        if let Some(longitude) = snapshot.longitude {
            let reference = if longitude < 0.0 { "W" } else { "E" };
            tags.push(ExifTag::GPSLongitudeRef(reference.to_string()));
            tags.push(ExifTag::GPSLongitude(degrees_to_rationals(longitude)));
        }

        if let Some(altitude_meters) = snapshot.altitude_meters {
            let reference = if altitude_meters < 0.0 {
                GPS_ALTITUDE_BELOW_SEA_LEVEL
            } else {
                GPS_ALTITUDE_ABOVE_SEA_LEVEL
            };
            tags.push(ExifTag::GPSAltitudeRef(vec![reference]));
            tags.push(ExifTag::GPSAltitude(vec![decimal_to_rational(
                altitude_meters.abs(),
            )]));
        }

        if let Some(speed_knots) = snapshot.speed_knots {
            tags.push(ExifTag::GPSSpeedRef(
                GPS_SPEED_REF_KILOMETERS_PER_HOUR.to_string(),
            ));
            tags.push(ExifTag::GPSSpeed(vec![decimal_to_rational(
                knots_to_kilometers_per_hour(speed_knots),
            )]));
        }

        tags
    }
}

impl Default for ExifMetadataWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataWriter for ExifMetadataWriter {
    fn write(&self, snapshot: &TelemetrySnapshot, file_path: &Path) -> Result<()> {
        if !file_path.is_file() {
            bail!("image {:?} does not exist", file_path);
        }

        let tags = Self::build_gps_tags(snapshot);
        if tags.is_empty() {
            log::debug!("{} snapshot has no fields to embed", LOG_TAG_EXIF);
            return Ok(());
        }

        log::debug!(
            "{} embedding {} GPS tags into {:?}",
            LOG_TAG_EXIF,
            tags.len(),
            file_path
        );

        // TIFF needs its structure tags (ImageWidth etc.) carried over, so start from the file.
        let mut metadata = Metadata::new_from_path(file_path).unwrap_or_else(|error| {
            log::debug!(
                "{} no readable metadata in {:?} ({}), starting empty",
                LOG_TAG_EXIF,
                file_path,
                error
            );
            Metadata::new()
        });
        for tag in tags {
            metadata.set_tag(tag);
        }

        metadata
            .write_to_file(file_path)
            .map_err(|error| anyhow::anyhow!("Failed to write EXIF to {:?}: {}", file_path, error))?;

        log::info!("{} wrote GPS metadata to {:?}", LOG_TAG_EXIF, file_path);
        Ok(())
    }
}

pub fn knots_to_kilometers_per_hour(speed_knots: f64) -> f64 {
    speed_knots * KNOTS_TO_KILOMETERS_PER_HOUR
}

/// Splits signed decimal degrees into unsigned degrees, minutes and seconds rationals.
/// The sign is carried by the N/S or E/W reference tag.
fn degrees_to_rationals(decimal_degrees: f64) -> Vec<uR64> {
    let units_per_minute = 60 * SECOND_FRACTION_DENOMINATOR as u64;
    let units_per_degree = 60 * units_per_minute;
    let total_units = (decimal_degrees.abs() * units_per_degree as f64).round() as u64;

    let degrees = total_units / units_per_degree;
    let minutes = (total_units % units_per_degree) / units_per_minute;
    let second_units = total_units % units_per_minute;

    vec![
        uR64 {
            nominator: degrees as u32,
            denominator: 1,
        },
        uR64 {
            nominator: minutes as u32,
            denominator: 1,
        },
        uR64 {
            nominator: second_units as u32,
            denominator: SECOND_FRACTION_DENOMINATOR,
        },
    ]
}

fn decimal_to_rational(value: f64) -> uR64 {
    let scaled = (value.max(0.0) * DECIMAL_DENOMINATOR as f64).round();

    uR64 {
        nominator: scaled.min(u32::MAX as f64) as u32,
        denominator: DECIMAL_DENOMINATOR,
    }
}
