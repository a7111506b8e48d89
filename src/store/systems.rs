//! Bevy systems driving the element store from keyboard input and time.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::element_store::ElementStore;

/// Store action bound to a keyboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    DeleteSelected,
}

/// Decode this frame's key presses into a store action.
///
/// - Ctrl/Cmd+Z: undo
/// - Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y: redo
/// - Backspace/Delete: delete the selected element
pub fn shortcut_action(keyboard: &ButtonInput<KeyCode>) -> Option<ShortcutAction> {
    let ctrl = keyboard.any_pressed([
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::SuperLeft,
        KeyCode::SuperRight,
    ]);
    let shift = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    if ctrl && keyboard.just_pressed(KeyCode::KeyZ) {
        return Some(if shift {
            ShortcutAction::Redo
        } else {
            ShortcutAction::Undo
        });
    }

    if ctrl && keyboard.just_pressed(KeyCode::KeyY) {
        return Some(ShortcutAction::Redo);
    }

    if !ctrl && keyboard.any_just_pressed([KeyCode::Backspace, KeyCode::Delete]) {
        return Some(ShortcutAction::DeleteSelected);
    }

    None
}

/// System to apply undo/redo/delete shortcuts to the store
pub fn handle_store_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut store: ResMut<ElementStore>,
    mut contexts: EguiContexts,
) {
    let Some(action) = shortcut_action(&keyboard) else {
        return;
    };

    match action {
        ShortcutAction::Undo => {
            store.undo();
        }
        ShortcutAction::Redo => {
            store.redo();
        }
        ShortcutAction::DeleteSelected => {
            // Backspace belongs to the text field while one has focus
            if let Ok(ctx) = contexts.ctx_mut()
                && ctx.wants_keyboard_input()
            {
                return;
            }

            if let Some(id) = store.selected_id() {
                store.delete_element(id);
            }
        }
    }
}

/// System that closes the batch window once continuous edits go quiet
pub fn expire_batch_window(time: Res<Time<Real>>, mut store: ResMut<ElementStore>) {
    if store.batch_kind().is_none() {
        return;
    }

    if store.bypass_change_detection().expire_batch(time.elapsed()) {
        trace!("Batch window closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::{Duration, Instant};

    use crate::canvas::{ArtboardDimensions, ElementKind};
    use crate::store::BatchKind;

    fn keys(pressed: &[KeyCode]) -> ButtonInput<KeyCode> {
        let mut input = ButtonInput::<KeyCode>::default();
        for key in pressed {
            input.press(*key);
        }
        input
    }

    #[test]
    fn test_ctrl_z_is_undo() {
        let input = keys(&[KeyCode::ControlLeft, KeyCode::KeyZ]);
        assert_eq!(shortcut_action(&input), Some(ShortcutAction::Undo));
    }

    #[test]
    fn test_cmd_z_is_undo() {
        let input = keys(&[KeyCode::SuperLeft, KeyCode::KeyZ]);
        assert_eq!(shortcut_action(&input), Some(ShortcutAction::Undo));
    }

    #[test]
    fn test_ctrl_shift_z_is_redo() {
        let input = keys(&[KeyCode::ControlRight, KeyCode::ShiftLeft, KeyCode::KeyZ]);
        assert_eq!(shortcut_action(&input), Some(ShortcutAction::Redo));
    }

    #[test]
    fn test_ctrl_y_is_redo() {
        let input = keys(&[KeyCode::ControlLeft, KeyCode::KeyY]);
        assert_eq!(shortcut_action(&input), Some(ShortcutAction::Redo));
    }

    #[test]
    fn test_backspace_deletes() {
        let input = keys(&[KeyCode::Backspace]);
        assert_eq!(shortcut_action(&input), Some(ShortcutAction::DeleteSelected));
    }

    #[test]
    fn test_plain_z_does_nothing() {
        let input = keys(&[KeyCode::KeyZ]);
        assert_eq!(shortcut_action(&input), None);
    }

    #[test]
    fn test_held_keys_do_not_repeat() {
        let mut input = keys(&[KeyCode::ControlLeft, KeyCode::KeyZ]);
        input.clear();
        assert_eq!(shortcut_action(&input), None);
    }

    fn world_with_move_batch() -> (World, Instant) {
        let mut store = ElementStore::default();
        let id = store.add_element(ElementKind::Rectangle, &ArtboardDimensions::default());
        assert!(store.move_element(id, 5.0, 0.0, Duration::ZERO));
        assert_eq!(store.batch_kind(), Some(BatchKind::Move));

        let mut world = World::new();
        world.insert_resource(store);
        (world, Instant::now())
    }

    #[test]
    fn test_batch_window_stays_open_within_window() {
        let (mut world, startup) = world_with_move_batch();
        let mut time = Time::<Real>::new(startup);
        time.update_with_instant(startup + Duration::from_millis(200));
        world.insert_resource(time);

        world.run_system_once(expire_batch_window).unwrap();
        assert_eq!(world.resource::<ElementStore>().batch_kind(), Some(BatchKind::Move));
    }

    #[test]
    fn test_batch_window_closes_after_one_long_frame() {
        // A single 400 ms hitch; virtual time would only advance 250 ms here
        let (mut world, startup) = world_with_move_batch();
        let mut time = Time::<Real>::new(startup);
        time.update_with_instant(startup + Duration::from_millis(400));
        world.insert_resource(time);

        world.run_system_once(expire_batch_window).unwrap();
        assert_eq!(world.resource::<ElementStore>().batch_kind(), None);
    }
}
