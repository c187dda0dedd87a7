//! Immutable preview bitmaps.

use std::sync::Arc;

use thiserror::Error;

/// An immutable BGRA8 bitmap captured at enumeration time.
///
/// The pixel buffer is frozen at construction and shared behind an [`Arc`],
/// so a thumbnail may cross threads without copying and without any path to
/// mutate the pixels it references.
#[derive(Clone)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

/// Bytes per BGRA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// The pixel buffer does not match the claimed dimensions.
#[derive(Debug, Error)]
#[error("A {width}x{height} BGRA bitmap needs {expected} bytes, the buffer holds {actual}")]
pub struct PixelBufferSizeError {
    width: u32,
    height: u32,
    expected: usize,
    actual: usize,
}

impl Thumbnail {
    /// Freeze a BGRA8 pixel buffer into a thumbnail.
    pub fn from_bgra(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<Self, PixelBufferSizeError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(PixelBufferSizeError {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The frozen BGRA8 pixel data, row-major, top-down.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl core::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
