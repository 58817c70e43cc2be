mod process_window_locator;
mod screen_capturer;

pub use process_window_locator::ProcessWindowLocator;
pub use screen_capturer::ScreenCapturer;
