mod system_process_window_locator;
mod xcap_screen_capturer;

pub use system_process_window_locator::SystemProcessWindowLocator;
pub use xcap_screen_capturer::XcapScreenCapturer;
