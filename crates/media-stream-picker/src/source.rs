//! Capturable screen and window entries.

use crate::thumbnail::Thumbnail;

/// File-name hint carried by full-screen sources.
pub const FULLSCREEN_FILE_NAME: &str = "fullscreen";

/// Identity of a capture source, stable within a single process run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceId {
    /// A whole screen, by 0-based enumeration index.
    Screen(u32),

    /// A top-level window, by raw window-handle value.
    Window(isize),
}

/// A screen or window eligible for capture, with the preview rendered at
/// enumeration time.
#[derive(Clone, Debug)]
pub struct CaptureSource {
    id: SourceId,
    title: String,
    thumbnail: Thumbnail,
    file_name_hint: String,
}

impl CaptureSource {
    pub(crate) fn new(
        id: SourceId,
        title: String,
        thumbnail: Thumbnail,
        file_name_hint: String,
    ) -> Self {
        Self {
            id,
            title,
            thumbnail,
            file_name_hint,
        }
    }

    /// The source's identity.
    pub fn id(&self) -> SourceId {
        self.id
    }

    /// Human-readable label shown in the picker list.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Preview bitmap captured when this source was enumerated.
    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    /// Process file name for windows, [`FULLSCREEN_FILE_NAME`] for screens.
    pub fn file_name_hint(&self) -> &str {
        &self.file_name_hint
    }

    /// The identity token handed to the capture backend.
    ///
    /// The trailing `:0` is required by the backend and must be preserved
    /// byte-for-byte.
    pub fn media_stream_identity(&self) -> String {
        match self.id {
            SourceId::Screen(id) => format!("screen:{id}:0"),
            SourceId::Window(handle) => format!("window:{handle}:0"),
        }
    }

    /// Cross-snapshot equality key: a retitled window counts as a different
    /// source.
    pub(crate) fn key(&self) -> (SourceId, &str) {
        (self.id, &self.title)
    }
}
