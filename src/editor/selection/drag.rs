//! Drag operations - move and resize, fed into the store as batched edits.

use bevy::prelude::*;

use crate::canvas::ArtboardDimensions;
use crate::common::DragMode;
use crate::editor::params::CameraParams;
use crate::store::ElementStore;

use super::DragState;
use super::hit_detection::resize_target;

pub fn handle_drag(
    mouse_button: Res<ButtonInput<MouseButton>>,
    time: Res<Time<Real>>,
    camera: CameraParams,
    artboard: Res<ArtboardDimensions>,
    mut store: ResMut<ElementStore>,
    mut drag_state: ResMut<DragState>,
) {
    if !drag_state.is_dragging {
        return;
    }

    let Some(id) = drag_state.element else {
        drag_state.stop();
        return;
    };

    if !mouse_button.pressed(MouseButton::Left) {
        if let Some(kind) = drag_state.mode.batch_kind() {
            debug!("Finished {:?} drag on {}", kind, id);
        }
        drag_state.stop();
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };
    let point = artboard.to_artboard(world_pos);
    if point == drag_state.last_artboard_pos {
        return;
    }

    let now = time.elapsed();
    let applied = match drag_state.mode {
        DragMode::Move => {
            let delta = point - drag_state.last_artboard_pos;
            store.move_element(id, delta.x, delta.y, now)
        }
        DragMode::Resize => match store.get(id).map(|element| resize_target(element, point)) {
            Some(size) => store.resize_element(id, size.x, size.y, now),
            None => false,
        },
        DragMode::None | DragMode::Pan => true,
    };

    // The element went away mid-drag (undo, load)
    if !applied {
        drag_state.stop();
        return;
    }
    drag_state.last_artboard_pos = point;
}
