//! Project persistence for saving and loading the canvas.
//!
//! Handles async file I/O for project data, including:
//! - Save/load with async task pooling
//! - New project creation
//! - Dirty state tracking against the store revision
//! - Debounced autosave to a single local blob, restored on startup
//!
//! ## Module Structure
//!
//! - [`messages`] - Message types for project operations
//! - [`resources`] - Resource types for state tracking
//! - [`results`] - Result types for async operations
//! - [`helpers`] - File read/write shared by save, load and autosave
//! - [`save`] - Save system and task polling
//! - [`load`] - Load system and task polling
//! - [`project_state`] - New project system
//! - [`autosave`] - Autosave scheduling and startup restore

mod autosave;
mod helpers;
mod load;
mod messages;
mod project_state;
mod resources;
mod results;
mod save;


// Re-exports - Messages
pub use messages::{LoadProjectRequest, NewProjectRequest, SaveProjectRequest};

// Re-exports - Resources
pub use resources::{
    AsyncProjectOperation, AutosaveState, CurrentProjectFile, ProjectDirtyState, ProjectLoadError,
    ProjectSaveError,
};

// Re-exports - Helpers
pub use helpers::{ensure_projects_directory, project_display_name};

// Re-exports - Systems
pub use autosave::{poll_autosave_task, restore_session, schedule_autosave};
pub use load::{load_project_system, poll_load_tasks};
pub use project_state::new_project_system;
pub use save::{poll_save_tasks, save_project_system};
