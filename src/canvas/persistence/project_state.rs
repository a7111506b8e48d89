//! New project handling.

use bevy::prelude::*;

use crate::canvas::ArtboardDimensions;
use crate::config::AppConfig;
use crate::store::ElementStore;

use super::messages::NewProjectRequest;
use super::resources::{CurrentProjectFile, ProjectDirtyState};

/// Clears the canvas, its history and the current file
pub fn new_project_system(
    mut events: MessageReader<NewProjectRequest>,
    config: Res<AppConfig>,
    mut store: ResMut<ElementStore>,
    mut artboard: ResMut<ArtboardDimensions>,
    mut current_file: ResMut<CurrentProjectFile>,
    mut dirty_state: ResMut<ProjectDirtyState>,
) {
    for _ in events.read() {
        store.replace_all(Vec::new());
        *artboard = config.data.default_artboard;
        current_file.path = None;
        dirty_state.mark_clean(store.revision());

        info!("Created new project");
    }
}
