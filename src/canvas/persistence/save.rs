//! Project save system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::canvas::{ArtboardDimensions, SavedProject};
use crate::config::UpdateLastProjectPathRequest;
use crate::store::ElementStore;

use super::helpers::{project_display_name, write_project};
use super::messages::SaveProjectRequest;
use super::resources::{
    AsyncProjectOperation, CurrentProjectFile, ProjectDirtyState, ProjectSaveError,
    SaveProjectTask,
};

/// Starts an async save operation
pub fn save_project_system(
    mut commands: Commands,
    mut events: MessageReader<SaveProjectRequest>,
    store: Res<ElementStore>,
    artboard: Res<ArtboardDimensions>,
    mut async_op: ResMut<AsyncProjectOperation>,
) {
    for event in events.read() {
        if async_op.is_busy() {
            warn!("Save operation already in progress");
            continue;
        }

        // Snapshot on the main thread so later edits don't race the write
        let project = SavedProject::capture(&store, &artboard);
        let revision = store.revision();
        let path = event.path.clone();

        async_op.is_saving = true;
        async_op.operation_description =
            Some(format!("Saving {}...", project_display_name(&path)));

        let task = IoTaskPool::get().spawn(async move { write_project(path, &project, revision) });
        commands.spawn(SaveProjectTask(task));
    }
}

/// Polls save tasks and handles completion
pub fn poll_save_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut SaveProjectTask)>,
    mut async_op: ResMut<AsyncProjectOperation>,
    mut current_file: ResMut<CurrentProjectFile>,
    mut config_events: MessageWriter<UpdateLastProjectPathRequest>,
    mut dirty_state: ResMut<ProjectDirtyState>,
    mut save_error: ResMut<ProjectSaveError>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        async_op.is_saving = false;
        async_op.operation_description = None;

        match result.error {
            None => {
                info!("Project saved to {:?}", result.path);
                save_error.message = None;
                current_file.path = Some(result.path.clone());
                config_events.write(UpdateLastProjectPathRequest {
                    path: result.path.clone(),
                });
                // Edits made while the write was in flight stay dirty
                dirty_state.mark_clean(result.revision);
            }
            Some(error) => {
                error!("{}", error);
                save_error.message = Some(error);
            }
        }

        commands.entity(entity).despawn();
    }
}
