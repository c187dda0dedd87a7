//! Which entry of the displayed list is selected.

/// Selection over the currently displayed source list.
///
/// Indices are not stable across snapshots, so the selection is reset
/// whenever a new snapshot is accepted.
#[derive(Debug, Default)]
pub struct Selection {
    index: Option<usize>,
    count: usize,
}

impl Selection {
    /// Clear the selection and adopt the entry count of a new list.
    pub fn reset(&mut self, count: usize) {
        self.index = None;
        self.count = count;
    }

    /// Set the selected index; anything outside `0..count` becomes "none".
    ///
    /// Returns whether the selection actually changed.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|&index| index < self.count);
        if index == self.index {
            return false;
        }

        self.index = index;
        true
    }

    /// The selected index, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Sharing is permitted iff a valid entry is selected.
    pub fn is_share_enabled(&self) -> bool {
        self.index.is_some()
    }
}
