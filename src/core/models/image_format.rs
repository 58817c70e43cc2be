use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpg,
    Tiff,
}

/// Encoder parameters for one output format.
///
/// `quality` and `compression` use the scale of the format they belong to: JPEG quality is
/// 0..=100 (higher is better), PNG compression is 0..=100 (higher is smaller and slower, always
/// lossless) and TIFF compression is binary (0 raw, 1 compressed). A `None` field leaves the
/// encoder default in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatProfile {
    pub extension: &'static str,
    pub quality: Option<u8>,
    pub compression: Option<u8>,
    pub optimized_write: Option<bool>,
    pub progressive_scan_write: Option<bool>,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpg, ImageFormat::Tiff];

    pub fn profile(self) -> FormatProfile {
        match self {
            ImageFormat::Png => FormatProfile {
                extension: "png",
                quality: None,
                compression: Some(100),
                optimized_write: Some(true),
                progressive_scan_write: Some(true),
            },
            ImageFormat::Jpg => FormatProfile {
                extension: "jpg",
                quality: Some(100),
                compression: None,
                optimized_write: None,
                progressive_scan_write: None,
            },
            ImageFormat::Tiff => FormatProfile {
                extension: "tiff",
                quality: None,
                compression: Some(1),
                optimized_write: None,
                progressive_scan_write: None,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Tiff => "tiff",
        }
    }
}

pub fn profile_for(format: ImageFormat) -> FormatProfile {
    format.profile()
}

impl Default for ImageFormat {
    fn default() -> Self {
        ImageFormat::Png
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "tiff" | "tif" => Ok(ImageFormat::Tiff),
            other => Err(format!(
                "unsupported image format '{}', expected one of png, jpg, tiff",
                other
            )),
        }
    }
}
