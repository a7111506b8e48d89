use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::params::is_cursor_over_ui;

#[derive(Component)]
pub struct EditorCamera;

#[derive(Component)]
pub struct CameraZoom {
    pub scale: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Whether the canvas is being panned. Element selection is suppressed
/// while this is active.
#[derive(Resource, Default, Debug)]
pub struct PanMode {
    pub active: bool,
}

impl PanMode {
    /// Middle mouse pans on its own; left mouse pans while Space is held
    pub fn from_input(keyboard: &ButtonInput<KeyCode>, mouse: &ButtonInput<MouseButton>) -> bool {
        mouse.pressed(MouseButton::Middle) || keyboard.pressed(KeyCode::Space)
    }
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        EditorCamera,
        CameraZoom::default(),
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

pub fn update_pan_mode(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
    mut pan_mode: ResMut<PanMode>,
) {
    // Space typed into a text field is not a pan
    let typing = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false);
    let active = PanMode::from_input(&keyboard, &mouse_button)
        && !(typing && !mouse_button.pressed(MouseButton::Middle));

    if pan_mode.active != active {
        pan_mode.active = active;
        debug!("Pan mode {}", if active { "on" } else { "off" });
    }
}

pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    pan_mode: Res<PanMode>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<EditorCamera>>,
) {
    let dragging = mouse_button.pressed(MouseButton::Middle) || mouse_button.pressed(MouseButton::Left);
    if !pan_mode.active || !dragging {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale;
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<EditorCamera>>,
    mut contexts: EguiContexts,
) {
    // Let egui scroll its own panels
    if is_cursor_over_ui(&mut contexts) {
        scroll_events.clear();
        return;
    }

    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let scroll_amount = match event.unit {
            MouseScrollUnit::Line => event.y * 0.1,
            MouseScrollUnit::Pixel => event.y * 0.001,
        };

        zoom.scale = (zoom.scale - scroll_amount).clamp(0.1, 10.0);
    }
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<EditorCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_mode_from_input() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        let mut mouse = ButtonInput::<MouseButton>::default();
        assert!(!PanMode::from_input(&keyboard, &mouse));

        mouse.press(MouseButton::Middle);
        assert!(PanMode::from_input(&keyboard, &mouse));

        mouse.release(MouseButton::Middle);
        keyboard.press(KeyCode::Space);
        assert!(PanMode::from_input(&keyboard, &mouse));
    }

    #[test]
    fn test_left_mouse_alone_is_not_pan() {
        let keyboard = ButtonInput::<KeyCode>::default();
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Left);
        assert!(!PanMode::from_input(&keyboard, &mouse));
    }
}
