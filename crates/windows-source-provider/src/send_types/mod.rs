//! `Send` wrappers for raw Win32 handles.

pub use hwnd::SendHWND;

mod hwnd;
