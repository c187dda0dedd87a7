//! Win32 implementation of the picker's source-discovery capability.
//!
//! Screens are discovered through `EnumDisplayMonitors` and rasterized with
//! GDI blits of their full bounds; top-level windows come from `EnumWindows`,
//! filtered by capturability rules, rasterized with `PrintWindow`, and
//! annotated with their owning process's image name. Everything is frozen
//! into [`media_stream_picker::Snapshot`] values before leaving this crate.
//!
//! The Win32 surface only exists on Windows; on other targets this crate is
//! empty.

#[cfg(windows)]
mod enumerator;
#[cfg(windows)]
mod gdi;
#[cfg(windows)]
mod result;
#[cfg(windows)]
mod screens;
#[cfg(windows)]
mod send_types;
#[cfg(windows)]
mod window;

#[cfg(windows)]
pub use enumerator::{DesktopSourceEnumerator, EnumerateError};
#[cfg(windows)]
pub use result::{LabelledWinResult, WinError, WinErrorSource};
#[cfg(windows)]
pub use send_types::SendHWND;
