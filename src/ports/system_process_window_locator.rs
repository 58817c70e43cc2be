use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use crate::core::interfaces::ports::ProcessWindowLocator;
use crate::core::models::{LocatorError, WindowHandle, WindowRectangle};
use crate::global_constants::{ERROR_CONTEXT_ENUMERATE_WINDOWS, LOG_TAG_LOCATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunningProcess {
    pid: u32,
    name: String,
}

/// Process lookup through sysinfo, window enumeration through xcap.
pub struct SystemProcessWindowLocator;

impl SystemProcessWindowLocator {
    pub fn initialize() -> Self {
        log::debug!("{} initializing system process window locator", LOG_TAG_LOCATOR);
        Self
    }

    fn list_running_processes(&self) -> Vec<RunningProcess> {
        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );

        system
            .processes()
            .iter()
            .map(|(pid, process)| RunningProcess {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().into_owned(),
            })
            .collect()
    }

    fn list_top_level_windows(&self) -> Result<Vec<xcap::Window>, LocatorError> {
        xcap::Window::all().map_err(|error| {
            LocatorError::Enumeration(format!("{}: {}", ERROR_CONTEXT_ENUMERATE_WINDOWS, error))
        })
    }

    fn describe_window(window: &xcap::Window) -> Option<WindowHandle> {
        let id = window.id().ok()?;
        let process_id = window.pid().ok()?;
        let is_minimized = window.is_minimized().unwrap_or(false);
        let has_area = window.width().unwrap_or(0) > 0 && window.height().unwrap_or(0) > 0;

        Some(WindowHandle {
            id,
            process_id,
            is_visible: !is_minimized && has_area,
            title: window.title().unwrap_or_default(),
        })
    }

    fn find_live_window(&self, handle: &WindowHandle) -> Result<xcap::Window, LocatorError> {
        self.list_top_level_windows()?
            .into_iter()
            .find(|window| window.id().ok() == Some(handle.id))
            .ok_or(LocatorError::WindowNoLongerExists(handle.id))
    }

    #[cfg(target_os = "windows")]
    fn request_foreground(window_id: u32) -> bool {
        use windows::Win32::Foundation::HWND;
        use windows::Win32::UI::WindowsAndMessaging::SetForegroundWindow;

        let hwnd = HWND(window_id as usize as *mut std::ffi::c_void);
        unsafe { SetForegroundWindow(hwnd) }.as_bool()
    }

    #[cfg(not(target_os = "windows"))]
    fn request_foreground(window_id: u32) -> bool {
        log::debug!(
            "{} foreground requests are not supported on this platform (window {})",
            LOG_TAG_LOCATOR,
            window_id
        );
        false
    }
}

/// Picks the lowest pid whose executable name equals `process_name`. Only one simulator
/// instance is expected; extra matches are logged and ignored.
fn select_target_process(processes: &[RunningProcess], process_name: &str) -> Option<u32> {
    let mut matching_pids: Vec<u32> = processes
        .iter()
        .filter(|process| process.name == process_name)
        .map(|process| process.pid)
        .collect();
    matching_pids.sort_unstable();

    let (&selected_pid, ignored_pids) = matching_pids.split_first()?;
    if !ignored_pids.is_empty() {
        log::warn!(
            "{} {} instances of {} running, using pid {} and ignoring {:?}",
            LOG_TAG_LOCATOR,
            matching_pids.len(),
            process_name,
            selected_pid,
            ignored_pids
        );
    }

    Some(selected_pid)
}

fn filter_process_windows(windows: Vec<WindowHandle>, process_id: u32) -> Vec<WindowHandle> {
    windows
        .into_iter()
        .filter(|window| window.process_id == process_id && window.is_visible)
        .collect()
}

impl ProcessWindowLocator for SystemProcessWindowLocator {
    fn find_windows(&self, process_name: &str) -> Result<Vec<WindowHandle>, LocatorError> {
        if process_name.trim().is_empty() {
            return Err(LocatorError::InvalidProcessName);
        }

        let processes = self.list_running_processes();
        let target_pid = select_target_process(&processes, process_name)
            .ok_or_else(|| LocatorError::ProcessNotFound(process_name.to_string()))?;
        log::debug!("{} {} has pid {}", LOG_TAG_LOCATOR, process_name, target_pid);

        let window_handles = self
            .list_top_level_windows()?
            .iter()
            .filter_map(Self::describe_window)
            .collect();
        let process_windows = filter_process_windows(window_handles, target_pid);

        log::info!(
            "{} found {} visible window(s) for {}",
            LOG_TAG_LOCATOR,
            process_windows.len(),
            process_name
        );
        Ok(process_windows)
    }

    fn get_title(&self, handle: &WindowHandle) -> Result<String, LocatorError> {
        let window = self.find_live_window(handle)?;
        window
            .title()
            .map_err(|_| LocatorError::WindowNoLongerExists(handle.id))
    }

    fn get_rectangle(&self, handle: &WindowHandle) -> Result<WindowRectangle, LocatorError> {
        let window = self.find_live_window(handle)?;
        let stale = |_| LocatorError::WindowNoLongerExists(handle.id);

        Ok(WindowRectangle::from_origin_and_size(
            window.x().map_err(stale)?,
            window.y().map_err(stale)?,
            window.width().map_err(stale)?,
            window.height().map_err(stale)?,
        ))
    }

    fn raise_to_foreground(&self, handle: &WindowHandle) -> Result<(), LocatorError> {
        self.find_live_window(handle)?;

        let accepted = Self::request_foreground(handle.id);
        log::debug!(
            "{} foreground request for window {} accepted={}",
            LOG_TAG_LOCATOR,
            handle.id,
            accepted
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(pid: u32, name: &str) -> RunningProcess {
        RunningProcess {
            pid,
            name: name.to_string(),
        }
    }

    fn window(id: u32, process_id: u32, is_visible: bool) -> WindowHandle {
        WindowHandle {
            id,
            process_id,
            is_visible,
            title: format!("window {}", id),
        }
    }

    #[test]
    fn test_select_target_process_requires_exact_name() {
        let processes = vec![
            process(10, "FlightSimulator.exe.bak"),
            process(11, "flightsimulator.exe"),
            process(12, "FlightSimulator.exe"),
        ];

        assert_eq!(select_target_process(&processes, "FlightSimulator.exe"), Some(12));
    }

    #[test]
    fn test_select_target_process_picks_first_of_multiple_instances() {
        let processes = vec![
            process(900, "FlightSimulator.exe"),
            process(40, "explorer.exe"),
            process(300, "FlightSimulator.exe"),
        ];

        assert_eq!(select_target_process(&processes, "FlightSimulator.exe"), Some(300));
    }

    #[test]
    fn test_select_target_process_without_match_is_none() {
        let processes = vec![process(1, "init")];

        assert_eq!(select_target_process(&processes, "nonexistent.exe"), None);
    }

    #[test]
    fn test_filter_process_windows_keeps_visible_windows_of_process_in_order() {
        let windows = vec![
            window(5, 300, true),
            window(6, 301, true),
            window(7, 300, false),
            window(8, 300, true),
        ];

        let filtered = filter_process_windows(windows, 300);

        let ids: Vec<u32> = filtered.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![5, 8]);
    }

    #[test]
    fn test_find_windows_with_empty_name_is_rejected() {
        let locator = SystemProcessWindowLocator::initialize();

        assert_eq!(locator.find_windows("  "), Err(LocatorError::InvalidProcessName));
    }

    #[test]
    fn test_find_windows_for_missing_process_fails_with_process_not_found() {
        let locator = SystemProcessWindowLocator::initialize();
        let process_name = format!("nonexistent-{}.exe", uuid::Uuid::new_v4());

        let result = locator.find_windows(&process_name);

        assert_eq!(result, Err(LocatorError::ProcessNotFound(process_name)));
    }
}
