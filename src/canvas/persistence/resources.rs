//! Resource types for project persistence state tracking.

use bevy::prelude::*;
use bevy::tasks::Task;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::AUTOSAVE_DELAY;

use super::results::{LoadResult, SaveResult};

#[derive(Resource, Default)]
pub struct ProjectLoadError {
    pub message: Option<String>,
}

/// Resource tracking save operation errors for display to user.
#[derive(Resource, Default)]
pub struct ProjectSaveError {
    pub message: Option<String>,
}

/// Resource tracking async project I/O operations for modal dialog
#[derive(Resource, Default)]
pub struct AsyncProjectOperation {
    /// Whether a save operation is in progress
    pub is_saving: bool,
    /// Whether a load operation is in progress
    pub is_loading: bool,
    /// Description of the current operation
    pub operation_description: Option<String>,
}

impl AsyncProjectOperation {
    pub fn is_busy(&self) -> bool {
        self.is_saving || self.is_loading
    }
}

/// Component for save task
#[derive(Component)]
pub struct SaveProjectTask(pub Task<SaveResult>);

/// Component for load task
#[derive(Component)]
pub struct LoadProjectTask(pub Task<LoadResult>);

/// Resource tracking the currently open project file path
#[derive(Resource, Default)]
pub struct CurrentProjectFile {
    pub path: Option<PathBuf>,
}

/// Resource tracking whether the canvas has unsaved changes
#[derive(Resource, Default)]
pub struct ProjectDirtyState {
    /// Store revision at the last save, load or new
    pub saved_revision: u64,
    /// Artboard was resized since then (artboard size is not in the store)
    pub artboard_modified: bool,
}

impl ProjectDirtyState {
    pub fn is_dirty(&self, revision: u64) -> bool {
        self.artboard_modified || revision != self.saved_revision
    }

    pub fn mark_clean(&mut self, revision: u64) {
        self.saved_revision = revision;
        self.artboard_modified = false;
    }
}

/// Debounce and task state for the autosave blob
#[derive(Resource, Default)]
pub struct AutosaveState {
    /// Store revision seen on the previous frame
    pub seen_revision: u64,
    /// Time of the most recent unsaved change
    pub pending_since: Option<Duration>,
    /// Write currently in flight
    pub task: Option<Task<SaveResult>>,
    /// Error from the last attempt, shown in the status line
    pub last_error: Option<String>,
}

impl AutosaveState {
    /// Note the current store revision; a new revision restarts the delay
    pub fn observe(&mut self, revision: u64, now: Duration) {
        if revision != self.seen_revision {
            self.seen_revision = revision;
            self.pending_since = Some(now);
        }
    }

    /// Mark a change that the store revision does not capture
    pub fn touch(&mut self, now: Duration) {
        self.pending_since = Some(now);
    }

    /// Whether a write should start now. Clears the pending change when it does.
    pub fn take_due(&mut self, now: Duration) -> bool {
        if self.task.is_some() {
            return false;
        }
        match self.pending_since {
            Some(since) if now.saturating_sub(since) >= AUTOSAVE_DELAY => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}
