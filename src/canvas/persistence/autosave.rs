//! Debounced autosave and session restore.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::canvas::{ArtboardDimensions, SavedProject};
use crate::config::AppConfig;
use crate::paths;
use crate::store::ElementStore;

use super::helpers::{read_project, write_project};
use super::resources::{AutosaveState, ProjectDirtyState};

/// Startup system: reinstate the last autosaved canvas, or apply the
/// configured default artboard when there is none.
pub fn restore_session(
    config: Res<AppConfig>,
    mut store: ResMut<ElementStore>,
    mut artboard: ResMut<ArtboardDimensions>,
    mut dirty_state: ResMut<ProjectDirtyState>,
    mut autosave: ResMut<AutosaveState>,
) {
    *artboard = config.data.default_artboard;

    let path = paths::autosave_file();
    if !config.data.autosave_enabled || !path.exists() {
        autosave.seen_revision = store.revision();
        return;
    }

    let result = read_project(path);
    match (result.saved_project, result.error) {
        (Some(saved_project), _) => {
            let count = saved_project.elements.len();
            store.replace_all(saved_project.elements);
            let dims = saved_project.artboard_dimensions;
            *artboard = ArtboardDimensions::new(dims.width, dims.height);
            info!("Restored {} elements from autosave", count);
        }
        (None, Some(error)) => {
            warn!("Ignoring autosave: {}", error);
            autosave.last_error = Some(error);
        }
        (None, None) => {}
    }

    // The restored canvas matches the blob on disk
    dirty_state.mark_clean(store.revision());
    autosave.seen_revision = store.revision();
}

/// Watches for changes and starts a write once edits have been quiet for
/// the autosave delay.
pub fn schedule_autosave(
    time: Res<Time>,
    config: Res<AppConfig>,
    store: Res<ElementStore>,
    artboard: Res<ArtboardDimensions>,
    mut autosave: ResMut<AutosaveState>,
) {
    if !config.data.autosave_enabled {
        return;
    }

    let now = time.elapsed();
    autosave.observe(store.revision(), now);
    if artboard.is_changed() && !artboard.is_added() {
        autosave.touch(now);
    }

    if !autosave.take_due(now) {
        return;
    }

    let project = SavedProject::capture(&store, &artboard);
    let revision = store.revision();
    let path = paths::autosave_file();
    debug!("Autosaving {} elements", project.elements.len());

    let task = IoTaskPool::get().spawn(async move { write_project(path, &project, revision) });
    autosave.task = Some(task);
}

pub fn poll_autosave_task(mut autosave: ResMut<AutosaveState>) {
    let Some(task) = autosave.task.as_mut() else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(task)) else {
        return;
    };
    autosave.task = None;

    match result.error {
        None => {
            trace!("Autosaved revision {} to {:?}", result.revision, result.path);
            autosave.last_error = None;
        }
        Some(error) => {
            warn!("Autosave failed: {}", error);
            autosave.last_error = Some(error);
        }
    }
}
