//! Snapshot-based undo/redo history.

use crate::canvas::Element;

use super::MAX_HISTORY_SIZE;

/// Immutable copy of the element collection at one point in time
pub type HistorySnapshot = Vec<Element>;

/// Linear undo/redo history of collection snapshots
#[derive(Debug, Default, Clone)]
pub struct HistoryStack {
    /// Snapshots that can be restored by undo (most recent last)
    past: Vec<HistorySnapshot>,
    /// Snapshots that can be restored by redo (next redo last)
    future: Vec<HistorySnapshot>,
}

impl HistoryStack {
    /// Record the collection as it was before a new action
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        // No redo past a fresh action
        self.future.clear();

        self.past.push(snapshot);

        if self.past.len() > MAX_HISTORY_SIZE {
            let excess = self.past.len() - MAX_HISTORY_SIZE;
            self.past.drain(..excess);
        }
    }

    /// Replace `live` with the most recent past snapshot, moving the
    /// pre-undo collection onto the redo side. Returns false when there is
    /// nothing to undo.
    pub fn undo(&mut self, live: &mut HistorySnapshot) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        self.future.push(std::mem::replace(live, previous));
        true
    }

    /// Inverse of [`HistoryStack::undo`]
    pub fn redo(&mut self, live: &mut HistorySnapshot) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        self.past.push(std::mem::replace(live, next));
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    pub fn redo_count(&self) -> usize {
        self.future.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
