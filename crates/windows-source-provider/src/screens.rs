//! Screen discovery and full-bounds rasterization.

use core::mem;

use media_stream_picker::{ScreenCapture, Thumbnail};
use tracing::warn;
use windows::Win32::{
    Foundation::{BOOL, GetLastError, LPARAM, RECT},
    Graphics::Gdi::{
        BitBlt, EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, SRCCOPY,
    },
};

use crate::{
    gdi::{CaptureSurface, FreezeError, ScreenDc},
    result::{LabelledWinResult, WinError},
};

/// Rasterize every active screen, in discovery order.
///
/// A screen that fails to capture is skipped with a warning; its id is still
/// consumed so the remaining ids keep matching discovery order.
pub(crate) fn enumerate_screens() -> LabelledWinResult<Vec<ScreenCapture>> {
    let monitors = list_monitors()?;
    let screen_dc = ScreenDc::get()?;

    let mut screens = Vec::with_capacity(monitors.len());
    for (index, monitor) in monitors.into_iter().enumerate() {
        let id = index as u32;

        let bounds = match monitor_bounds(monitor) {
            Ok(bounds) => bounds,
            Err(error) => {
                warn!("Skipping screen {id}: {error}");
                continue;
            }
        };

        match capture_screen(&screen_dc, bounds) {
            Ok(Some(thumbnail)) => screens.push(ScreenCapture { id, thumbnail }),
            Ok(None) => warn!("Skipping screen {id}: degenerate bounds {bounds:?}"),
            Err(error) => warn!("Skipping screen {id}: {error}"),
        }
    }

    Ok(screens)
}

/// The active monitors in discovery order.
fn list_monitors() -> LabelledWinResult<Vec<HMONITOR>> {
    unsafe extern "system" fn push_monitor(
        monitor: HMONITOR,
        _dc: HDC,
        _bounds: *mut RECT,
        state: LPARAM,
    ) -> BOOL {
        let monitors = unsafe { &mut *(state.0 as *mut Vec<HMONITOR>) };
        monitors.push(monitor);
        true.into()
    }

    let mut monitors: Vec<HMONITOR> = Vec::new();
    let succeeded = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(push_monitor),
            LPARAM(&mut monitors as *mut Vec<HMONITOR> as isize),
        )
    };
    if !succeeded.as_bool() {
        return Err(WinError::from_win32(
            unsafe { GetLastError() },
            "EnumDisplayMonitors",
        ));
    }

    Ok(monitors)
}

/// The monitor's desktop-coordinate bounds.
fn monitor_bounds(monitor: HMONITOR) -> LabelledWinResult<RECT> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..MONITORINFO::default()
    };

    let succeeded = unsafe { GetMonitorInfoW(monitor, &mut info) };
    if !succeeded.as_bool() {
        return Err(WinError::from_win32(
            unsafe { GetLastError() },
            "GetMonitorInfoW",
        ));
    }

    Ok(info.rcMonitor)
}

/// Blit a screen's entire bounds into a frozen thumbnail.
///
/// Returns `Ok(None)` for a degenerate (zero-area) bounds rect.
fn capture_screen(screen_dc: &ScreenDc, bounds: RECT) -> Result<Option<Thumbnail>, FreezeError> {
    let width = bounds.right - bounds.left;
    let height = bounds.bottom - bounds.top;
    if width <= 0 || height <= 0 {
        return Ok(None);
    }

    let surface = CaptureSurface::new(screen_dc.handle(), width, height)?;

    unsafe {
        BitBlt(
            surface.dc(),
            0,
            0,
            width,
            height,
            Some(screen_dc.handle()),
            bounds.left,
            bounds.top,
            SRCCOPY,
        )
    }
    .map_err(|error| WinError::new(error, "BitBlt"))?;

    surface.freeze().map(Some)
}
