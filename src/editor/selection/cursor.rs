//! Cursor icon management for canvas interaction.

use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::canvas::ArtboardDimensions;
use crate::common::DragMode;
use crate::editor::params::CameraParams;
use crate::editor::PanMode;
use crate::store::ElementStore;

use super::DragState;
use super::hit_detection::{element_at, resize_handle_hit};

/// Update cursor icon based on hover, pan mode and drag state
#[allow(clippy::too_many_arguments)]
pub fn update_selection_cursor(
    window_query: Query<Entity, With<PrimaryWindow>>,
    camera: CameraParams,
    artboard: Res<ArtboardDimensions>,
    store: Res<ElementStore>,
    drag_state: Res<DragState>,
    pan_mode: Res<PanMode>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok(window_entity) = window_query.single() else {
        return;
    };

    // Use default cursor over UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands
            .entity(window_entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    let mode = if pan_mode.active {
        DragMode::Pan
    } else if drag_state.is_dragging {
        drag_state.mode
    } else {
        hover_mode(&camera, &artboard, &store)
    };

    let cursor = mode
        .cursor_icon()
        .unwrap_or(CursorIcon::System(SystemCursorIcon::Default));
    commands.entity(window_entity).insert(cursor);
}

fn hover_mode(camera: &CameraParams, artboard: &ArtboardDimensions, store: &ElementStore) -> DragMode {
    let Some(world_pos) = camera.cursor_world_pos() else {
        return DragMode::None;
    };
    let point = artboard.to_artboard(world_pos);

    if let Some(selected) = store.selected()
        && resize_handle_hit(selected, point, camera.zoom_scale())
    {
        return DragMode::Resize;
    }
    if element_at(store.elements(), point).is_some() {
        return DragMode::Move;
    }
    DragMode::None
}
