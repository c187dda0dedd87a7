//! Mock source discovery for exercising the picker without a desktop session.

// Not every test binary uses every helper.
#![allow(dead_code)]

use core::{convert::Infallible, time::Duration};
use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread,
};

use media_stream_picker::{ScreenCapture, Snapshot, SourceEnumerator, Thumbnail, WindowCapture};

/// A small uniform thumbnail, enough to satisfy the data model.
pub fn thumbnail() -> Thumbnail {
    Thumbnail::from_bgra(2, 2, vec![0u8; 16]).unwrap()
}

pub fn screen(id: u32) -> ScreenCapture {
    ScreenCapture {
        id,
        thumbnail: thumbnail(),
    }
}

pub fn window(handle: isize, title: &str) -> WindowCapture {
    WindowCapture {
        handle,
        title: title.to_owned(),
        file_name: format!("app{handle}.exe"),
        thumbnail: thumbnail(),
    }
}

/// Build a snapshot of `screen_count` screens plus the given windows.
pub fn snapshot(screen_count: u32, windows: &[(isize, &str)]) -> Snapshot {
    Snapshot::assemble(
        (0..screen_count).map(screen).collect(),
        windows
            .iter()
            .map(|&(handle, title)| window(handle, title))
            .collect(),
    )
}

/// Serves a scripted sequence of snapshots, repeating the last one once the
/// script runs out — repeats are unchanged and therefore never published.
pub struct ScriptedEnumerator {
    queue: Arc<Mutex<VecDeque<Snapshot>>>,
    last: Option<Snapshot>,
}

impl ScriptedEnumerator {
    pub fn new(initial: Snapshot) -> (Self, Arc<Mutex<VecDeque<Snapshot>>>) {
        let queue = Arc::new(Mutex::new(VecDeque::from([initial])));
        (
            Self {
                queue: Arc::clone(&queue),
                last: None,
            },
            queue,
        )
    }
}

impl SourceEnumerator for ScriptedEnumerator {
    type Error = Infallible;

    fn enumerate(&mut self) -> Result<Snapshot, Self::Error> {
        if let Some(next) = self.queue.lock().unwrap().pop_front() {
            self.last = Some(next);
        }

        Ok(self
            .last
            .clone()
            .expect("scripted enumerator has an initial snapshot"))
    }
}

/// Counts calls and records whether two enumerations ever overlapped.
pub struct SlowEnumerator {
    delay: Duration,
    pub calls: Arc<AtomicUsize>,
    pub overlapped: Arc<AtomicBool>,
    active: Arc<AtomicUsize>,
}

impl SlowEnumerator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: Arc::new(AtomicUsize::new(0)),
            overlapped: Arc::new(AtomicBool::new(false)),
            active: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl SourceEnumerator for SlowEnumerator {
    type Error = Infallible;

    fn enumerate(&mut self) -> Result<Snapshot, Self::Error> {
        if self.active.fetch_add(1, Ordering::SeqCst) > 0 {
            self.overlapped.store(true, Ordering::SeqCst);
        }

        thread::sleep(self.delay);
        let calls = self.calls.fetch_add(1, Ordering::SeqCst);

        self.active.fetch_sub(1, Ordering::SeqCst);

        // A distinct window per call keeps every pass materially different.
        Ok(snapshot(1, &[(calls as isize + 100, "busy window")]))
    }
}
