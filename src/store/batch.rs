//! Batch window for collapsing continuous gestures into one undo step.

use std::time::Duration;

use crate::constants::BATCH_WINDOW;

/// Kind of continuous edit that can be batched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    Move,
    Resize,
    CornerRadius,
}

/// Tracks the in-flight continuous edit.
///
/// Timestamps are wall-clock durations since app start (`Time<Real>::elapsed()`), so
/// the window closes by comparison rather than by a scheduled callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchWindow {
    kind: Option<BatchKind>,
    last_touch: Duration,
}

impl BatchWindow {
    /// Record a mutation of `kind` at `now`.
    ///
    /// Returns true when the mutation opens a new batch and therefore needs a
    /// fresh history entry.
    pub fn touch(&mut self, kind: BatchKind, now: Duration) -> bool {
        let continuing = self.kind == Some(kind) && !self.elapsed(now);
        self.kind = Some(kind);
        self.last_touch = now;
        !continuing
    }

    /// Close the window if it has been idle for at least [`BATCH_WINDOW`].
    ///
    /// Safe to call at any time; returns true only when this call closed it.
    pub fn expire(&mut self, now: Duration) -> bool {
        if self.kind.is_some() && self.elapsed(now) {
            self.kind = None;
            return true;
        }
        false
    }

    pub fn close(&mut self) {
        self.kind = None;
    }

    pub fn kind(&self) -> Option<BatchKind> {
        self.kind
    }

    fn elapsed(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_touch) >= BATCH_WINDOW
    }
}
