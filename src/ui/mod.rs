pub mod file_menu;
mod layers_panel;
mod properties;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::canvas::{AsyncProjectOperation, ProjectLoadError, ProjectSaveError};
use crate::config::{ConfigResetNotification, MissingProjectWarning};

/// Resource that tracks whether any modal dialog is currently open.
/// Editor input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block editor input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    file_menu: Res<file_menu::FileMenuState>,
    missing_project: Res<MissingProjectWarning>,
    config_reset: Res<ConfigResetNotification>,
    save_error: Res<ProjectSaveError>,
    load_error: Res<ProjectLoadError>,
    async_op: Res<AsyncProjectOperation>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = file_menu.show_new_confirmation
        || missing_project.show
        || config_reset.show
        || save_error.message.is_some()
        || load_error.message.is_some()
        || async_op.is_busy();
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<file_menu::FileMenuState>()
            .init_resource::<properties::PropertiesDraft>()
            // Top and bottom bars span the full width, side panels fit
            // between them
            .add_systems(
                EguiPrimaryContextPass,
                (toolbar::toolbar_ui, toolbar::status_bar_ui).chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (layers_panel::layers_panel_ui, properties::properties_panel_ui)
                    .chain()
                    .after(toolbar::status_bar_ui),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Last: dialogs/overlays
                    file_menu::file_menu_ui,
                    file_menu::missing_project_warning_ui,
                    file_menu::config_reset_notification_ui,
                    file_menu::async_operation_modal_ui,
                )
                    .after(properties::properties_panel_ui),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
