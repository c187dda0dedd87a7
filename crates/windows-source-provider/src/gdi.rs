//! GDI plumbing shared by screen and window rasterization.

use core::{ffi::c_void, mem};

use media_stream_picker::{
    Thumbnail,
    thumbnail::{BYTES_PER_PIXEL, PixelBufferSizeError},
};
use thiserror::Error;
use windows::Win32::{
    Foundation::GetLastError,
    Graphics::Gdi::{
        BI_RGB, BITMAPINFO, BITMAPINFOHEADER, CreateCompatibleBitmap, CreateCompatibleDC,
        DIB_RGB_COLORS, DeleteDC, DeleteObject, GetDC, GetDIBits, HBITMAP, HDC, HGDIOBJ,
        ReleaseDC, RGBQUAD, SelectObject,
    },
};

use crate::result::{LabelledWinResult, WinError};

/// Failed to turn a capture surface into a thumbnail.
#[derive(Debug, Error)]
pub enum FreezeError {
    /// A GDI call failed.
    #[error(transparent)]
    Win(#[from] WinError),

    /// The copied pixel buffer did not match the surface dimensions.
    #[error("Failed to freeze the pixel buffer:\n{0}")]
    PixelBuffer(#[from] PixelBufferSizeError),
}

/// The desktop device context, released on drop.
pub struct ScreenDc(HDC);

impl ScreenDc {
    /// Acquire the device context for the entire desktop.
    pub fn get() -> LabelledWinResult<Self> {
        let dc = unsafe { GetDC(None) };
        if dc.is_invalid() {
            return Err(WinError::from_win32(unsafe { GetLastError() }, "GetDC"));
        }

        Ok(Self(dc))
    }

    /// The raw device context.
    pub fn handle(&self) -> HDC {
        self.0
    }
}

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe { ReleaseDC(None, self.0) };
    }
}

/// A memory device context with a compatible bitmap selected into it.
///
/// The surface owns the bitmap; both are destroyed on drop, after the
/// previously selected object is restored.
pub struct CaptureSurface {
    dc: HDC,
    bitmap: HBITMAP,
    previous: HGDIOBJ,
    width: i32,
    height: i32,
}

impl CaptureSurface {
    /// Create a `width` x `height` surface compatible with `reference`.
    pub fn new(reference: HDC, width: i32, height: i32) -> LabelledWinResult<Self> {
        let dc = unsafe { CreateCompatibleDC(Some(reference)) };
        if dc.is_invalid() {
            return Err(WinError::from_win32(
                unsafe { GetLastError() },
                "CreateCompatibleDC",
            ));
        }

        let bitmap = unsafe { CreateCompatibleBitmap(reference, width, height) };
        if bitmap.is_invalid() {
            let error = WinError::from_win32(unsafe { GetLastError() }, "CreateCompatibleBitmap");
            unsafe { DeleteDC(dc) };
            return Err(error);
        }

        let previous = unsafe { SelectObject(dc, bitmap.into()) };

        Ok(Self {
            dc,
            bitmap,
            previous,
            width,
            height,
        })
    }

    /// The surface's device context, the target for blits.
    pub fn dc(&self) -> HDC {
        self.dc
    }

    /// Copy the rasterized pixels out into a frozen, shareable thumbnail.
    pub fn freeze(&self) -> Result<Thumbnail, FreezeError> {
        let width = self.width as u32;
        let height = self.height as u32;
        let mut pixels = vec![0u8; width as usize * height as usize * BYTES_PER_PIXEL];

        let mut info = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: self.width,
                // Negative height requests a top-down bitmap.
                biHeight: -self.height,
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                biSizeImage: 0,
                biXPelsPerMeter: 0,
                biYPelsPerMeter: 0,
                biClrUsed: 0,
                biClrImportant: 0,
            },
            bmiColors: [RGBQUAD::default(); 1],
        };

        let lines = unsafe {
            GetDIBits(
                self.dc,
                self.bitmap,
                0,
                height,
                Some(pixels.as_mut_ptr().cast::<c_void>()),
                &mut info,
                DIB_RGB_COLORS,
            )
        };
        if lines == 0 {
            return Err(WinError::from_win32(unsafe { GetLastError() }, "GetDIBits").into());
        }

        Ok(Thumbnail::from_bgra(width, height, pixels)?)
    }
}

impl Drop for CaptureSurface {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.dc, self.previous);
            DeleteObject(self.bitmap.into());
            DeleteDC(self.dc);
        }
    }
}
