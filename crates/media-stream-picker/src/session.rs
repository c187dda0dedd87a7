//! The interactive-side picker state.

use core::time::Duration;
use std::{
    io,
    sync::{
        Arc,
        mpsc::{Receiver, channel},
    },
};

use tracing::{debug, info};

use crate::{
    enumerator::SourceEnumerator,
    observer::{Subject, SubscriptionId},
    refresh::{DEFAULT_REFRESH_INTERVAL, RefreshDriver, RefreshScheduler},
    selection::Selection,
    snapshot::Snapshot,
    source::CaptureSource,
};

/// What the picker emits to its observers.
#[derive(Clone, Debug)]
pub enum PickerEvent {
    /// The accepted snapshot was replaced; the presented list must be rebuilt.
    SourcesChanged,

    /// The selected index changed.
    SelectionChanged {
        /// The new selection, none when cleared.
        index: Option<usize>,
    },

    /// Whether the share action is permitted changed.
    ShareEnabledChanged {
        /// The new state.
        enabled: bool,
    },

    /// The user confirmed sharing the selected source.
    ShareRequested(ShareRequest),

    /// The user abandoned the session.
    Cancelled,
}

/// The capture-source descriptor handed to the call collaborator on confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRequest {
    /// Backend identity token, e.g. `screen:0:0` or `window:81224:0`.
    pub media_stream_identity: String,

    /// Process file name, or the full-screen sentinel.
    pub file_name: String,

    /// Title of the shared source.
    pub title: String,
}

/// One picker UI session: the accepted snapshot, the selection over it, and
/// the refresh machinery keeping both current.
///
/// The session must live on — and only be driven from — the interactive
/// context. Snapshot acceptance and user interaction are therefore strictly
/// ordered, and the background worker only ever touches the session through
/// the snapshot channel. Dropping the session stops the refresh scheduler;
/// anything still in flight is discarded.
pub struct PickerSession {
    // Dropped first, halting the worker before the receiver goes away.
    _scheduler: RefreshScheduler,
    refreshes: Receiver<Snapshot>,

    snapshot: Snapshot,
    identities: Vec<String>,
    selection: Selection,
    events: Subject<PickerEvent>,
}

impl PickerSession {
    /// Start a session with the default refresh interval.
    pub fn start<E>(enumerator: E) -> io::Result<Self>
    where
        E: SourceEnumerator + Send + 'static,
    {
        Self::start_with_interval(enumerator, DEFAULT_REFRESH_INTERVAL)
    }

    /// Start a session refreshing every `interval`.
    ///
    /// The first enumeration cycle runs synchronously on the calling thread
    /// so the opening paint shows real sources rather than an empty
    /// placeholder; the latency cost is accepted. Should that first cycle
    /// fail, the session starts empty and the periodic refresh keeps trying.
    pub fn start_with_interval<E>(enumerator: E, interval: Duration) -> io::Result<Self>
    where
        E: SourceEnumerator + Send + 'static,
    {
        let (sender, refreshes) = channel();
        let driver = Arc::new(RefreshDriver::new(enumerator, sender));

        let outcome = driver.try_refresh();
        info!(?outcome, "initial enumeration cycle");

        let scheduler = RefreshScheduler::spawn(Arc::clone(&driver), interval)?;

        let mut session = Self {
            _scheduler: scheduler,
            refreshes,
            snapshot: Snapshot::empty(),
            identities: Vec::new(),
            selection: Selection::default(),
            events: Subject::new(),
        };
        session.pump_refreshes();

        Ok(session)
    }

    /// Accept any snapshots completed by the refresh worker.
    ///
    /// Must be called from the interactive context that owns this session,
    /// typically once per event-loop turn. Drains the channel and accepts the
    /// newest snapshot; returns whether the presented list was rebuilt.
    pub fn pump_refreshes(&mut self) -> bool {
        let mut newest = None;
        while let Ok(snapshot) = self.refreshes.try_recv() {
            newest = Some(snapshot);
        }

        match newest {
            Some(snapshot) => {
                self.accept(snapshot);
                true
            }
            None => false,
        }
    }

    fn accept(&mut self, snapshot: Snapshot) {
        debug!(
            screens = snapshot.screens().len(),
            windows = snapshot.windows().len(),
            "accepting snapshot"
        );

        self.identities = snapshot
            .sources()
            .iter()
            .map(CaptureSource::media_stream_identity)
            .collect();
        self.snapshot = snapshot;

        // An in-flight selection never survives a rebuild, even when its
        // index would still be in bounds for the new list.
        let had_selection = self.selection.index().is_some();
        self.selection.reset(self.snapshot.len());

        self.events.emit(&PickerEvent::SourcesChanged);
        if had_selection {
            self.events
                .emit(&PickerEvent::SelectionChanged { index: None });
            self.events
                .emit(&PickerEvent::ShareEnabledChanged { enabled: false });
        }
    }

    /// Set the selected entry; out-of-bounds indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        let was_enabled = self.selection.is_share_enabled();
        if !self.selection.select(index) {
            return;
        }

        self.events.emit(&PickerEvent::SelectionChanged {
            index: self.selection.index(),
        });

        let enabled = self.selection.is_share_enabled();
        if enabled != was_enabled {
            self.events
                .emit(&PickerEvent::ShareEnabledChanged { enabled });
        }
    }

    /// Confirm sharing the selected source.
    ///
    /// With a valid selection, emits [`PickerEvent::ShareRequested`] and
    /// returns the request. Without one this is the normal "no selection"
    /// outcome: nothing is emitted and `None` is returned.
    pub fn share(&mut self) -> Option<ShareRequest> {
        let request = self.selected_share_request()?;
        self.events
            .emit(&PickerEvent::ShareRequested(request.clone()));
        Some(request)
    }

    /// Abandon the session, regardless of selection state.
    pub fn cancel(&mut self) {
        self.events.emit(&PickerEvent::Cancelled);
    }

    fn selected_share_request(&self) -> Option<ShareRequest> {
        let index = self.selection.index()?;

        // The selection already clamps to the list, re-check anyway.
        let source = self.snapshot.sources().get(index)?;
        let identity = self.identities.get(index)?;

        Some(ShareRequest {
            media_stream_identity: identity.clone(),
            file_name: source.file_name_hint().to_owned(),
            title: source.title().to_owned(),
        })
    }

    /// The currently accepted snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The presented entries, screens first then windows.
    pub fn sources(&self) -> &[CaptureSource] {
        self.snapshot.sources()
    }

    /// Media-stream identity strings, index-aligned with [`Self::sources`].
    pub fn media_stream_identities(&self) -> &[String] {
        &self.identities
    }

    /// The selected index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Whether the share action is currently permitted.
    pub fn is_share_enabled(&self) -> bool {
        self.selection.is_share_enabled()
    }

    /// Register an observer for picker events.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&PickerEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(observer)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}
