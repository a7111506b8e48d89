//! Selection handling - click to select, start dragging.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::canvas::ArtboardDimensions;
use crate::common::DragMode;
use crate::editor::params::{CameraParams, is_cursor_over_ui};
use crate::editor::PanMode;
use crate::store::ElementStore;

use super::DragState;
use super::hit_detection::{element_at, resize_handle_hit};

pub fn handle_selection(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    artboard: Res<ArtboardDimensions>,
    pan_mode: Res<PanMode>,
    mut store: ResMut<ElementStore>,
    mut drag_state: ResMut<DragState>,
    mut contexts: EguiContexts,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || pan_mode.active {
        return;
    }

    // Don't interact if over UI
    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };
    let point = artboard.to_artboard(world_pos);

    // The selected element's resize handle takes priority over whatever is
    // under it
    if let Some(selected) = store.selected()
        && resize_handle_hit(selected, point, camera.zoom_scale())
    {
        drag_state.start(DragMode::Resize, selected.id, point);
        return;
    }

    match element_at(store.elements(), point) {
        Some(id) => {
            if store.selected_id() != Some(id) {
                store.select_element(id, pan_mode.active);
            }
            drag_state.start(DragMode::Move, id, point);
        }
        None => {
            if store.selected_id().is_some() {
                store.clear_selection();
            }
        }
    }
}
