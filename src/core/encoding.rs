use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageError};
use tiff::encoder::{colortype, compression::Lzw, TiffEncoder};

use crate::core::models::{CaptureBuffer, CaptureError, FormatProfile, ImageFormat};
use crate::global_constants::LOG_TAG_ENCODER;

/// Encoder options derived from a [`FormatProfile`]. `None` keeps the encoder default.
///
/// `Png::interlaced` is recorded but never applied: the `image` PNG encoder only writes
/// non-interlaced images, so a profile asking for Adam7 still produces a sequential PNG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncoderSettings {
    Png {
        compression: Option<CompressionType>,
        filter: Option<FilterType>,
        interlaced: Option<bool>,
    },
    Jpeg {
        quality: Option<u8>,
    },
    Tiff {
        compressed: Option<bool>,
    },
}

impl EncoderSettings {
    pub fn from_profile(format: ImageFormat, profile: &FormatProfile) -> Self {
        match format {
            ImageFormat::Png => {
                warn_if_present(format, "quality", profile.quality.is_some());
                EncoderSettings::Png {
                    compression: profile.compression.map(png_compression_from_level),
                    filter: profile
                        .optimized_write
                        .map(|optimized| {
                            if optimized {
                                FilterType::Adaptive
                            } else {
                                FilterType::NoFilter
                            }
                        }),
                    interlaced: profile.progressive_scan_write,
                }
            }
            ImageFormat::Jpg => {
                warn_if_present(format, "compression", profile.compression.is_some());
                warn_if_present(format, "optimized_write", profile.optimized_write.is_some());
                warn_if_present(
                    format,
                    "progressive_scan_write",
                    profile.progressive_scan_write.is_some(),
                );
                EncoderSettings::Jpeg {
                    quality: profile.quality.map(|quality| quality.clamp(1, 100)),
                }
            }
            ImageFormat::Tiff => {
                warn_if_present(format, "quality", profile.quality.is_some());
                EncoderSettings::Tiff {
                    compressed: profile.compression.map(|level| level > 0),
                }
            }
        }
    }
}

fn warn_if_present(format: ImageFormat, field: &str, present: bool) {
    if present {
        log::warn!(
            "{} {} profile sets {}, which its encoder does not use",
            LOG_TAG_ENCODER,
            format,
            field
        );
    }
}

/// Maps the 0..=100 PNG compression scale onto the deflate presets the encoder offers.
fn png_compression_from_level(level: u8) -> CompressionType {
    match level {
        0..=33 => CompressionType::Fast,
        34..=66 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}

/// Encodes `buffer` with the profile of `format` and writes it to `path`.
///
/// On failure the partially written file is removed if possible; a failed removal is only
/// logged and never replaces the original error.
pub fn write_capture_to_file(
    buffer: &CaptureBuffer,
    format: ImageFormat,
    path: &Path,
) -> Result<(), CaptureError> {
    let expected_length = buffer.width as usize * buffer.height as usize * 4;
    if buffer.width == 0 || buffer.height == 0 || buffer.raw_rgba().len() != expected_length {
        return Err(CaptureError::EncodeFailed(format!(
            "frame buffer {:?} is not a valid {}x{} RGBA image",
            buffer, buffer.width, buffer.height
        )));
    }

    let settings = EncoderSettings::from_profile(format, &format.profile());
    log::debug!(
        "{} writing {}x{} {} to {:?} with {:?}",
        LOG_TAG_ENCODER,
        buffer.width,
        buffer.height,
        format,
        path,
        settings
    );

    let file = File::create(path).map_err(|error| CaptureError::WriteFailed {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;

    let result = encode_into(BufWriter::new(file), buffer, settings, path);

    if result.is_err() {
        remove_partial_file(path);
    }

    result
}

fn encode_into(
    mut writer: BufWriter<File>,
    buffer: &CaptureBuffer,
    settings: EncoderSettings,
    path: &Path,
) -> Result<(), CaptureError> {
    let (width, height) = (buffer.width, buffer.height);

    match settings {
        EncoderSettings::Png {
            compression,
            filter,
            interlaced,
        } => {
            if interlaced == Some(true) {
                log::debug!(
                    "{} png encoder writes non-interlaced images only, ignoring progressive scan",
                    LOG_TAG_ENCODER
                );
            }
            let encoder = match (compression, filter) {
                (None, None) => PngEncoder::new(&mut writer),
                (compression, filter) => PngEncoder::new_with_quality(
                    &mut writer,
                    compression.unwrap_or(CompressionType::Default),
                    filter.unwrap_or(FilterType::Adaptive),
                ),
            };
            encoder
                .write_image(buffer.raw_rgba(), width, height, ExtendedColorType::Rgba8)
                .map_err(|error| map_image_error(error, path))?;
        }
        EncoderSettings::Jpeg { quality } => {
            let encoder = match quality {
                Some(quality) => JpegEncoder::new_with_quality(&mut writer, quality),
                None => JpegEncoder::new(&mut writer),
            };
            encoder
                .write_image(&buffer.to_rgb_bytes(), width, height, ExtendedColorType::Rgb8)
                .map_err(|error| map_image_error(error, path))?;
        }
        EncoderSettings::Tiff { compressed } => {
            let mut encoder =
                TiffEncoder::new(&mut writer).map_err(|error| map_tiff_error(error, path))?;
            let written = match compressed {
                Some(true) => encoder.write_image_with_compression::<colortype::RGBA8, _>(
                    width,
                    height,
                    Lzw,
                    buffer.raw_rgba(),
                ),
                _ => encoder.write_image::<colortype::RGBA8>(width, height, buffer.raw_rgba()),
            };
            written.map_err(|error| map_tiff_error(error, path))?;
        }
    }

    writer.flush().map_err(|error| CaptureError::WriteFailed {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })
}

fn map_image_error(error: ImageError, path: &Path) -> CaptureError {
    match error {
        ImageError::IoError(io_error) => CaptureError::WriteFailed {
            path: path.to_path_buf(),
            reason: io_error.to_string(),
        },
        other => CaptureError::EncodeFailed(other.to_string()),
    }
}

fn map_tiff_error(error: tiff::TiffError, path: &Path) -> CaptureError {
    match error {
        tiff::TiffError::IoError(io_error) => CaptureError::WriteFailed {
            path: path.to_path_buf(),
            reason: io_error.to_string(),
        },
        other => CaptureError::EncodeFailed(other.to_string()),
    }
}

fn remove_partial_file(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => log::info!("{} removed partial file {:?}", LOG_TAG_ENCODER, path),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
        Err(error) => log::warn!(
            "{} could not remove partial file {:?}: {}",
            LOG_TAG_ENCODER,
            path,
            error
        ),
    }
}
