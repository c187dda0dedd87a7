//! The provider's entry point: one enumeration pass over the desktop.

use media_stream_picker::{Snapshot, SourceEnumerator};
use thiserror::Error;

use crate::{result::WinError, screens, send_types::SendHWND, window};

/// A whole enumeration pass failed.
#[derive(Debug, Error)]
pub enum EnumerateError {
    /// Screen discovery failed.
    #[error("Failed to enumerate screens:\n{0}")]
    Screens(#[source] WinError),

    /// Window discovery failed.
    #[error("Failed to enumerate windows:\n{0}")]
    Windows(#[source] WinError),
}

/// Discovers capturable screens and top-level windows on the local desktop.
///
/// The refresh worker owns the only instance, so enumeration never runs
/// concurrently with itself.
pub struct DesktopSourceEnumerator {
    owner: Option<SendHWND>,
}

impl DesktopSourceEnumerator {
    /// `owner` is the picker's own window; it is excluded from enumeration.
    pub fn new(owner: Option<SendHWND>) -> Self {
        Self { owner }
    }
}

impl SourceEnumerator for DesktopSourceEnumerator {
    type Error = EnumerateError;

    fn enumerate(&mut self) -> Result<Snapshot, Self::Error> {
        let screens = screens::enumerate_screens().map_err(EnumerateError::Screens)?;
        let windows = window::enumerate_windows(self.owner.map(|owner| owner.0))
            .map_err(EnumerateError::Windows)?;

        Ok(Snapshot::assemble(screens, windows))
    }
}
