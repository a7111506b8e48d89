//! Hit detection against artboard-space element bounds.

use bevy::prelude::*;

use crate::canvas::{Element, ElementId};

use super::HANDLE_SIZE;

/// Topmost element under the point (later elements draw on top)
pub(crate) fn element_at(elements: &[Element], point: Vec2) -> Option<ElementId> {
    elements
        .iter()
        .rev()
        .find(|element| element.contains(point))
        .map(|element| element.id)
}

/// Bounds (min, max) of the resize handle on an element's bottom-right
/// corner. The handle keeps a constant on-screen size under zoom.
pub(crate) fn resize_handle_rect(element: &Element, camera_scale: f32) -> (Vec2, Vec2) {
    let half = Vec2::splat(HANDLE_SIZE * camera_scale / 2.0);
    let corner = element.bottom_right();
    (corner - half, corner + half)
}

pub(crate) fn resize_handle_hit(element: &Element, point: Vec2, camera_scale: f32) -> bool {
    let (min, max) = resize_handle_rect(element, camera_scale);
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// New size for a resize drag: from the element's top-left to the cursor
pub(crate) fn resize_target(element: &Element, cursor: Vec2) -> Vec2 {
    cursor - element.top_left()
}
