//! Pointer interaction with canvas elements.
//!
//! - Click to select, click empty space to clear
//! - Drag to move, drag the corner handle to resize
//! - Cursor feedback for handles and drags

mod cursor;
mod drag;
mod handle;
mod hit_detection;

use bevy::prelude::*;

use crate::canvas::ElementId;
use crate::common::DragMode;

pub use cursor::update_selection_cursor;
pub use drag::handle_drag;
pub use handle::handle_selection;
pub(crate) use hit_detection::resize_handle_rect;

/// Handle size for the resize handle (in world units, will be scaled by camera)
pub(crate) const HANDLE_SIZE: f32 = 10.0;

#[derive(Resource, Default, Debug)]
pub struct DragState {
    pub is_dragging: bool,
    pub mode: DragMode,
    /// Element receiving the drag
    pub element: Option<ElementId>,
    /// Cursor position (artboard space) at the previous drag step
    pub last_artboard_pos: Vec2,
}

impl DragState {
    pub fn start(&mut self, mode: DragMode, element: ElementId, artboard_pos: Vec2) {
        self.is_dragging = true;
        self.mode = mode;
        self.element = Some(element);
        self.last_artboard_pos = artboard_pos;
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }
}
