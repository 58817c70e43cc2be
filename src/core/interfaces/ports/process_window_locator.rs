use crate::core::models::{LocatorError, WindowHandle, WindowRectangle};

/// Finds the top-level windows owned by a named process.
///
/// Handles are enumerated fresh on every call. The accessors re-check that the window still
/// exists and fail with [`LocatorError::WindowNoLongerExists`] when it has closed.
pub trait ProcessWindowLocator: Send + Sync {
    /// Visible windows of the first running process whose executable name equals
    /// `process_name` exactly. Fails with [`LocatorError::ProcessNotFound`] rather than
    /// returning an empty list when no such process runs.
    fn find_windows(&self, process_name: &str) -> Result<Vec<WindowHandle>, LocatorError>;

    fn get_title(&self, handle: &WindowHandle) -> Result<String, LocatorError>;

    fn get_rectangle(&self, handle: &WindowHandle) -> Result<WindowRectangle, LocatorError>;

    /// Best-effort focus request; success does not mean the window manager honoured it.
    fn raise_to_foreground(&self, handle: &WindowHandle) -> Result<(), LocatorError>;
}
