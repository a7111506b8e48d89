mod artboard;
mod element;
pub mod persistence;
mod project;

pub use artboard::ArtboardDimensions;
pub use element::{Element, ElementId, ElementKind};
pub use persistence::{
    AsyncProjectOperation, AutosaveState, CurrentProjectFile, LoadProjectRequest,
    NewProjectRequest, ProjectDirtyState, ProjectLoadError, ProjectSaveError, SaveProjectRequest,
};
pub use project::SavedProject;

use bevy::prelude::*;

use crate::config::ConfigLoaded;

pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArtboardDimensions>()
            .init_resource::<ProjectLoadError>()
            .init_resource::<ProjectSaveError>()
            .init_resource::<CurrentProjectFile>()
            .init_resource::<ProjectDirtyState>()
            .init_resource::<AsyncProjectOperation>()
            .init_resource::<AutosaveState>()
            .add_message::<SaveProjectRequest>()
            .add_message::<LoadProjectRequest>()
            .add_message::<NewProjectRequest>()
            .add_systems(
                Startup,
                (persistence::ensure_projects_directory, persistence::restore_session)
                    .chain()
                    .after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    persistence::save_project_system.run_if(on_message::<SaveProjectRequest>),
                    persistence::load_project_system.run_if(on_message::<LoadProjectRequest>),
                    persistence::new_project_system.run_if(on_message::<NewProjectRequest>),
                    persistence::poll_save_tasks,
                    persistence::poll_load_tasks,
                    persistence::schedule_autosave,
                    persistence::poll_autosave_task,
                ),
            );
    }
}
