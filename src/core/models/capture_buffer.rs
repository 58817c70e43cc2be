#[derive(Clone)]
pub struct CaptureBuffer {
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CaptureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.raw_data.len())
            .finish()
    }
}

impl CaptureBuffer {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Self {
        log::debug!(
            "[CAPTURE_BUFFER] building buffer: {}x{}",
            width_pixels,
            height_pixels
        );

        Self {
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        }
    }

    pub fn raw_rgba(&self) -> &[u8] {
        &self.raw_data
    }

    /// Drops the alpha channel. JPEG has no alpha, so the encoder needs packed RGB.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.raw_data
            .chunks_exact(4)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect()
    }
}
