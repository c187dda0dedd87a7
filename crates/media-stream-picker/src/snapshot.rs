//! Snapshots of the capturable source set.

use crate::{
    source::{CaptureSource, FULLSCREEN_FILE_NAME, SourceId},
    thumbnail::Thumbnail,
};

/// A raw screen capture produced by one enumeration pass.
#[derive(Debug)]
pub struct ScreenCapture {
    /// 0-based index of the screen in discovery order.
    pub id: u32,

    /// Rasterization of the screen's entire bounds.
    pub thumbnail: Thumbnail,
}

/// A raw window capture produced by one enumeration pass.
#[derive(Debug)]
pub struct WindowCapture {
    /// Raw window-handle value.
    pub handle: isize,

    /// The window's title at capture time.
    pub title: String,

    /// File name of the process that owns the window.
    pub file_name: String,

    /// Rasterization of the window's contents.
    pub thumbnail: Thumbnail,
}

/// An ordered, immutable set of capture sources from one enumeration pass.
///
/// Sources are partitioned screens-first then windows, each in discovery
/// order. A snapshot is never mutated; a refresh replaces it wholesale.
#[derive(Clone, Debug)]
pub struct Snapshot {
    sources: Vec<CaptureSource>,
    screen_count: usize,
}

impl Snapshot {
    /// A snapshot with no sources, the state before the first enumeration.
    pub fn empty() -> Self {
        Self {
            sources: Vec::new(),
            screen_count: 0,
        }
    }

    /// Assemble a snapshot from raw captures, deriving screen titles.
    ///
    /// A single screen system-wide is labelled `Entire Screen`; otherwise
    /// screens are labelled `Screen 1`..`Screen N` in discovery order. An
    /// empty screen list is legal and yields a windows-only snapshot.
    pub fn assemble(screens: Vec<ScreenCapture>, windows: Vec<WindowCapture>) -> Self {
        let screen_count = screens.len();
        let mut sources = Vec::with_capacity(screen_count + windows.len());

        for (ordinal, screen) in screens.into_iter().enumerate() {
            sources.push(CaptureSource::new(
                SourceId::Screen(screen.id),
                screen_title(ordinal, screen_count),
                screen.thumbnail,
                FULLSCREEN_FILE_NAME.to_owned(),
            ));
        }

        for window in windows {
            sources.push(CaptureSource::new(
                SourceId::Window(window.handle),
                window.title,
                window.thumbnail,
                window.file_name,
            ));
        }

        Self {
            sources,
            screen_count,
        }
    }

    /// Every source, screens first then windows.
    pub fn sources(&self) -> &[CaptureSource] {
        &self.sources
    }

    /// The screen entries.
    pub fn screens(&self) -> &[CaptureSource] {
        &self.sources[..self.screen_count]
    }

    /// The window entries.
    pub fn windows(&self) -> &[CaptureSource] {
        &self.sources[self.screen_count..]
    }

    /// Total number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the snapshot holds no sources at all.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn screen_title(ordinal: usize, screen_count: usize) -> String {
    if screen_count == 1 {
        String::from("Entire Screen")
    } else {
        format!("Screen {}", ordinal + 1)
    }
}
