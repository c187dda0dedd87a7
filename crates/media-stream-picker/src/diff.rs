//! Decides whether a freshly enumerated snapshot warrants rebuilding the
//! presented list.

use tracing::trace;

use crate::snapshot::Snapshot;

/// Returns whether `next` differs materially from the last accepted snapshot.
///
/// A missing `previous`, or a change in the number of screens or windows, is
/// always material. With equal counts, the change is material iff some window
/// in `previous` has no `(id, title)` match in `next` — so a retitled window
/// counts as a different source. Screens are compared by count alone; display
/// topology is effectively static within a picker session, windows churn
/// constantly.
pub fn has_material_change(previous: Option<&Snapshot>, next: &Snapshot) -> bool {
    let Some(previous) = previous else {
        return true;
    };

    if previous.screens().len() != next.screens().len()
        || previous.windows().len() != next.windows().len()
    {
        trace!(
            screens = next.screens().len(),
            windows = next.windows().len(),
            "source counts changed"
        );
        return true;
    }

    previous
        .windows()
        .iter()
        .any(|window| !next.windows().iter().any(|n| n.key() == window.key()))
}
