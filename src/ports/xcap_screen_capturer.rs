use anyhow::{Context, Result};

use crate::core::interfaces::ports::ScreenCapturer;
use crate::core::models::CaptureBuffer;
use crate::global_constants::{
    ERROR_CONTEXT_CAPTURE_MONITOR, ERROR_CONTEXT_ENUMERATE_MONITORS, ERROR_CONTEXT_NO_MONITOR,
    LOG_TAG_CAPTURE,
};

pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap screen capturer", LOG_TAG_CAPTURE);
        Self
    }

    fn get_primary_monitor(&self) -> Result<xcap::Monitor> {
        let mut monitors = xcap::Monitor::all().context(ERROR_CONTEXT_ENUMERATE_MONITORS)?;

        let primary_index = monitors
            .iter()
            .position(|monitor| monitor.is_primary().unwrap_or(false));

        match primary_index {
            Some(index) => Ok(monitors.swap_remove(index)),
            None => {
                log::warn!(
                    "{} none of {} monitors reports as primary, using the first",
                    LOG_TAG_CAPTURE,
                    monitors.len()
                );
                monitors.into_iter().next().context(ERROR_CONTEXT_NO_MONITOR)
            }
        }
    }

    fn capture_monitor_image(&self, monitor: &xcap::Monitor) -> Result<xcap::image::RgbaImage> {
        monitor
            .capture_image()
            .with_context(|| ERROR_CONTEXT_CAPTURE_MONITOR)
    }

    fn convert_image_to_capture_buffer(&self, image: xcap::image::RgbaImage) -> CaptureBuffer {
        let width_pixels = image.width();
        let height_pixels = image.height();
        let raw_rgba_data = image.into_raw();

        log::info!(
            "{} captured {}x{} screenshot",
            LOG_TAG_CAPTURE,
            width_pixels,
            height_pixels
        );

        CaptureBuffer::build_from_raw_data(width_pixels, height_pixels, raw_rgba_data)
    }
}

impl ScreenCapturer for XcapScreenCapturer {
    fn capture_primary_display(&self) -> Result<CaptureBuffer> {
        log::debug!("{} capturing primary display", LOG_TAG_CAPTURE);

        let primary_monitor = self.get_primary_monitor()?;
        let captured_image = self.capture_monitor_image(&primary_monitor)?;
        let capture_buffer = self.convert_image_to_capture_buffer(captured_image);

        Ok(capture_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_creates_capturer() {
        let capturer = XcapScreenCapturer::initialize();

        assert!(std::mem::size_of_val(&capturer) == 0);
    }

    #[test]
    fn test_convert_image_to_capture_buffer_creates_buffer_with_correct_dimensions() {
        let capturer = XcapScreenCapturer::initialize();
        let width = 100u32;
        let height = 50u32;
        let raw_data = vec![255u8; (width * height * 4) as usize];
        let image = xcap::image::RgbaImage::from_raw(width, height, raw_data).unwrap();

        let buffer = capturer.convert_image_to_capture_buffer(image);

        assert_eq!(buffer.width, width);
        assert_eq!(buffer.height, height);
        assert_eq!(buffer.raw_rgba().len(), (width * height * 4) as usize);
    }
}
