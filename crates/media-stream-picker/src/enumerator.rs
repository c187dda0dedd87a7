//! The source-discovery capability the picker core calls into.

use crate::snapshot::Snapshot;

/// Discovers the current set of capturable screens and top-level windows.
///
/// `enumerate` is synchronous and potentially slow — thumbnail capture cost
/// scales with pixel area — which is why the refresh worker owns the only
/// call site off the interactive thread. Implementations are never called
/// concurrently with themselves; the refresh guard enforces that.
///
/// Per-source failures (a window vanishing mid-capture, an inaccessible
/// process) are expected to be skipped, best-effort; an `Err` means the whole
/// pass produced nothing usable.
pub trait SourceEnumerator {
    /// Why a whole enumeration pass failed.
    type Error: core::fmt::Display;

    /// Produce a fresh snapshot of the capturable sources.
    fn enumerate(&mut self) -> Result<Snapshot, Self::Error>;
}
