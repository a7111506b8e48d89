mod camera;
pub mod conditions;
pub mod params;
mod rendering;
mod selection;

pub use camera::{EditorCamera, PanMode};
pub use selection::DragState;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use conditions::no_dialog_open;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PanMode>()
            .init_resource::<DragState>()
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(
                Update,
                (
                    camera::update_pan_mode,
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    selection::handle_selection.run_if(no_dialog_open),
                    selection::handle_drag,
                    selection::update_selection_cursor,
                )
                    .chain()
                    .after(camera::update_pan_mode),
            )
            .add_systems(EguiPrimaryContextPass, rendering::draw_canvas);
    }
}
