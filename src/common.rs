//! Common types shared across multiple modules.

use bevy::window::{CursorIcon, SystemCursorIcon};

use crate::store::BatchKind;

/// Pointer drag mode on the canvas.
///
/// Shared by the selection handler (which starts drags), the drag system
/// (which feeds the store) and the cursor system.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DragMode {
    #[default]
    None,
    Move,
    /// Bottom-right handle of the selected element
    Resize,
    Pan,
}

impl DragMode {
    /// Get the appropriate cursor icon for this drag mode.
    pub fn cursor_icon(&self) -> Option<CursorIcon> {
        match self {
            DragMode::None => None,
            DragMode::Move => Some(CursorIcon::System(SystemCursorIcon::Move)),
            DragMode::Resize => Some(CursorIcon::System(SystemCursorIcon::NwseResize)),
            DragMode::Pan => Some(CursorIcon::System(SystemCursorIcon::Grabbing)),
        }
    }

    /// The store batch this drag feeds, if it edits an element
    pub fn batch_kind(&self) -> Option<BatchKind> {
        match self {
            DragMode::Move => Some(BatchKind::Move),
            DragMode::Resize => Some(BatchKind::Resize),
            DragMode::None | DragMode::Pan => None,
        }
    }
}
