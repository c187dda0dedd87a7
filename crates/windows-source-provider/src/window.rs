//! Top-level window discovery, filtering, and rasterization.

use media_stream_picker::{Thumbnail, WindowCapture};
use tracing::debug;
use windows::Win32::{
    Foundation::{BOOL, CloseHandle, GetLastError, HANDLE, HWND, LPARAM, RECT},
    System::Threading::{
        OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
        QueryFullProcessImageNameW,
    },
    UI::WindowsAndMessaging::{
        EnumWindows, GWL_EXSTYLE, GetWindowLongW, GetWindowRect, GetWindowTextLengthW,
        GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible, PW_RENDERFULLCONTENT,
        PrintWindow, WS_EX_TOOLWINDOW,
    },
};
use windows_core::PWSTR;

use crate::{
    gdi::{CaptureSurface, FreezeError, ScreenDc},
    result::{LabelledWinResult, WinError},
};

/// Rasterize every capturable top-level window, in enumeration order.
///
/// `owner` is the picker's own window and is always excluded. A window that
/// disappears between enumeration and capture is skipped, best-effort.
pub(crate) fn enumerate_windows(owner: Option<HWND>) -> LabelledWinResult<Vec<WindowCapture>> {
    let handles = list_top_level_windows()?;
    let screen_dc = ScreenDc::get()?;

    let mut windows = Vec::new();
    for handle in handles {
        if !is_capturable(handle, owner) {
            continue;
        }

        let Some(title) = window_title(handle) else {
            continue;
        };

        let thumbnail = match capture_window(&screen_dc, handle) {
            Ok(Some(thumbnail)) => thumbnail,
            Ok(None) => continue,
            Err(error) => {
                debug!("Skipping window {handle:?} ({title}): {error}");
                continue;
            }
        };

        // A missing process name downgrades the hint, not the entry.
        let file_name = match process_file_name(handle) {
            Ok(Some(file_name)) => file_name,
            Ok(None) => String::new(),
            Err(error) => {
                debug!("No process file name for {handle:?} ({title}): {error}");
                String::new()
            }
        };

        windows.push(WindowCapture {
            handle: handle.0 as isize,
            title,
            file_name,
            thumbnail,
        });
    }

    Ok(windows)
}

/// Every top-level window handle, in enumeration order.
fn list_top_level_windows() -> LabelledWinResult<Vec<HWND>> {
    unsafe extern "system" fn push_window(window: HWND, state: LPARAM) -> BOOL {
        let windows = unsafe { &mut *(state.0 as *mut Vec<HWND>) };
        windows.push(window);
        true.into()
    }

    let mut windows: Vec<HWND> = Vec::new();
    unsafe {
        EnumWindows(
            Some(push_window),
            LPARAM(&mut windows as *mut Vec<HWND> as isize),
        )
    }
    .map_err(|error| WinError::new(error, "EnumWindows"))?;

    Ok(windows)
}

/// The visibility/ownership rules: no picker window, no invisible windows,
/// no tool windows.
fn is_capturable(window: HWND, owner: Option<HWND>) -> bool {
    if owner.is_some_and(|owner| owner == window) {
        return false;
    }

    if !unsafe { IsWindowVisible(window) }.as_bool() {
        return false;
    }

    // Tool windows never appear in the taskbar and are not meaningful share
    // targets.
    let ex_style = unsafe { GetWindowLongW(window, GWL_EXSTYLE) } as u32;
    if ex_style & WS_EX_TOOLWINDOW.0 != 0 {
        return false;
    }

    true
}

/// The window's current title; `None` for untitled windows.
fn window_title(window: HWND) -> Option<String> {
    let length = unsafe { GetWindowTextLengthW(window) };
    if length <= 0 {
        return None;
    }

    let mut buffer = vec![0u16; length as usize + 1];
    let written = unsafe { GetWindowTextW(window, &mut buffer) };
    if written <= 0 {
        return None;
    }

    Some(String::from_utf16_lossy(&buffer[..written as usize]))
}

/// Render a window's contents into a frozen thumbnail.
///
/// Returns `Ok(None)` for a zero-area window.
fn capture_window(screen_dc: &ScreenDc, window: HWND) -> Result<Option<Thumbnail>, FreezeError> {
    let mut bounds = RECT::default();
    unsafe { GetWindowRect(window, &mut bounds) }
        .map_err(|error| WinError::new(error, "GetWindowRect"))?;

    let width = bounds.right - bounds.left;
    let height = bounds.bottom - bounds.top;
    if width <= 0 || height <= 0 {
        return Ok(None);
    }

    let surface = CaptureSurface::new(screen_dc.handle(), width, height)?;

    let rendered = unsafe { PrintWindow(window, surface.dc(), PW_RENDERFULLCONTENT) };
    if !rendered.as_bool() {
        return Err(WinError::from_win32(unsafe { GetLastError() }, "PrintWindow").into());
    }

    surface.freeze().map(Some)
}

/// File name of the process that owns `window`.
fn process_file_name(window: HWND) -> LabelledWinResult<Option<String>> {
    let mut process_id = 0u32;
    unsafe { GetWindowThreadProcessId(window, Some(&mut process_id)) };
    if process_id == 0 {
        return Ok(None);
    }

    let process = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, process_id) }
        .map_err(|error| WinError::new(error, "OpenProcess"))?;
    let process = OwnedProcess(process);

    let mut buffer = [0u16; 1024];
    let mut length = buffer.len() as u32;
    unsafe {
        QueryFullProcessImageNameW(
            process.0,
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut length,
        )
    }
    .map_err(|error| WinError::new(error, "QueryFullProcessImageNameW"))?;

    let path = String::from_utf16_lossy(&buffer[..length as usize]);
    let file_name = path
        .rsplit('\\')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_owned);

    Ok(file_name)
}

/// A process handle closed on drop.
struct OwnedProcess(HANDLE);

impl Drop for OwnedProcess {
    fn drop(&mut self) {
        let _ = unsafe { CloseHandle(self.0) };
    }
}
