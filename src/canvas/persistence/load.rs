//! Project load system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::canvas::ArtboardDimensions;
use crate::config::UpdateLastProjectPathRequest;
use crate::store::ElementStore;

use super::helpers::{project_display_name, read_project};
use super::messages::LoadProjectRequest;
use super::resources::{
    AsyncProjectOperation, CurrentProjectFile, LoadProjectTask, ProjectDirtyState,
    ProjectLoadError,
};

/// Starts an async load operation (file I/O and parsing only)
pub fn load_project_system(
    mut commands: Commands,
    mut events: MessageReader<LoadProjectRequest>,
    mut async_op: ResMut<AsyncProjectOperation>,
) {
    for event in events.read() {
        if async_op.is_busy() {
            warn!("Load operation already in progress");
            continue;
        }

        let path = event.path.clone();
        async_op.is_loading = true;
        async_op.operation_description =
            Some(format!("Loading {}...", project_display_name(&path)));

        let task = IoTaskPool::get().spawn(async move { read_project(path) });
        commands.spawn(LoadProjectTask(task));
    }
}

/// Polls load tasks and installs the loaded project into the store
#[allow(clippy::too_many_arguments)]
pub fn poll_load_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut LoadProjectTask)>,
    mut async_op: ResMut<AsyncProjectOperation>,
    mut store: ResMut<ElementStore>,
    mut artboard: ResMut<ArtboardDimensions>,
    mut load_error: ResMut<ProjectLoadError>,
    mut current_file: ResMut<CurrentProjectFile>,
    mut config_events: MessageWriter<UpdateLastProjectPathRequest>,
    mut dirty_state: ResMut<ProjectDirtyState>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        async_op.is_loading = false;
        async_op.operation_description = None;
        load_error.message = None;
        commands.entity(entity).despawn();

        if let Some(error) = result.error {
            error!("{}", error);
            load_error.message = Some(error);
            continue;
        }

        let Some(saved_project) = result.saved_project else {
            continue;
        };

        let count = saved_project.elements.len();
        store.replace_all(saved_project.elements);
        let dims = saved_project.artboard_dimensions;
        *artboard = ArtboardDimensions::new(dims.width, dims.height);

        current_file.path = Some(result.path.clone());
        config_events.write(UpdateLastProjectPathRequest {
            path: result.path.clone(),
        });
        dirty_state.mark_clean(store.revision());

        info!("Loaded {} elements from {:?}", count, result.path);
    }
}
