//! The periodic enumeration cycle and its mutual-exclusion guard.

use std::sync::mpsc::Sender;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::{diff::has_material_change, enumerator::SourceEnumerator, snapshot::Snapshot};

pub use scheduler::{DEFAULT_REFRESH_INTERVAL, RefreshScheduler};

mod scheduler;

/// What a single refresh tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A previous cycle still held the guard; this tick was dropped.
    Skipped,

    /// Enumeration failed; nothing was published.
    Failed,

    /// The fresh snapshot matched the last accepted one.
    Unchanged,

    /// A materially different snapshot was handed to the session.
    Published,
}

struct Cycle<E> {
    enumerator: E,
    last: Option<Snapshot>,
}

/// Runs guarded enumeration cycles and publishes accepted snapshots.
///
/// The enumerator and the last accepted snapshot live behind a single
/// non-blocking guard, so at most one enumeration executes at a time and a
/// tick that finds the guard taken is dropped, never queued.
pub struct RefreshDriver<E> {
    cycle: Mutex<Cycle<E>>,
    sender: Sender<Snapshot>,
}

impl<E: SourceEnumerator> RefreshDriver<E> {
    /// Create a driver publishing snapshots into `sender`.
    pub fn new(enumerator: E, sender: Sender<Snapshot>) -> Self {
        Self {
            cycle: Mutex::new(Cycle {
                enumerator,
                last: None,
            }),
            sender,
        }
    }

    /// Attempt one enumeration cycle.
    ///
    /// The guard is released on every exit path, success or failure, when the
    /// lock guard drops.
    pub fn try_refresh(&self) -> TickOutcome {
        let Some(mut cycle) = self.cycle.try_lock() else {
            trace!("enumeration still in flight, dropping tick");
            return TickOutcome::Skipped;
        };

        let next = match cycle.enumerator.enumerate() {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!("Source enumeration failed:\n{error}");
                return TickOutcome::Failed;
            }
        };

        if !has_material_change(cycle.last.as_ref(), &next) {
            return TickOutcome::Unchanged;
        }

        debug!(
            screens = next.screens().len(),
            windows = next.windows().len(),
            "publishing refreshed snapshot"
        );

        cycle.last = Some(next.clone());

        // The session may already be torn down; then the receiver is gone and
        // the snapshot is dropped here rather than applied.
        self.sender.send(next).ok();

        TickOutcome::Published
    }
}
