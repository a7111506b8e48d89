//! Element store with undo/redo history.
//!
//! The store owns the ordered element collection, the selection and a bounded
//! snapshot history. All editing goes through it; rendering and panels only
//! read from it.
//!
//! ## Usage
//!
//! - **Ctrl/Cmd+Z**: Undo the last action
//! - **Ctrl/Cmd+Shift+Z** or **Ctrl/Cmd+Y**: Redo the last undone action
//! - **Backspace/Delete**: Delete the selected element
//!
//! ## Module Structure
//!
//! - [`element_store`] - ElementStore resource and its operations
//! - [`history`] - HistoryStack of collection snapshots
//! - [`batch`] - BatchWindow for collapsing drag/resize gestures
//! - [`systems`] - Bevy systems for shortcuts and batch expiry

mod batch;
mod element_store;
mod history;
mod systems;

#[cfg(test)]
mod tests;

// Re-exports
pub use batch::BatchKind;
pub use element_store::ElementStore;
pub use systems::{expire_batch_window, handle_store_shortcuts};

use bevy::prelude::*;

use crate::editor::conditions::no_dialog_open;

/// Maximum number of snapshots to keep in history
pub(crate) const MAX_HISTORY_SIZE: usize = 100;

pub struct StorePlugin;

impl Plugin for StorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ElementStore>().add_systems(
            Update,
            (
                handle_store_shortcuts.run_if(no_dialog_open),
                expire_batch_window,
            ),
        );
    }
}
