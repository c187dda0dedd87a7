use core::ops::{Deref, DerefMut};

use windows::Win32::Foundation::HWND;

/// Wrapper around an `HWND` to make it `Send`.
#[derive(Debug, Clone, Copy)]
pub struct SendHWND(pub HWND);

unsafe impl Send for SendHWND {}

impl Deref for SendHWND {
    type Target = HWND;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SendHWND {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
