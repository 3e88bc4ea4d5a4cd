//! Keyboard / mouse → simulation intents
//!
//! - Tab: toggle cursor (visible ↔ captured)
//! - Esc: quit
//! - G: RaiseAlert (text/lifetime from config)
//! - LMB release (cursor captured): FireMissile from camera along its forward

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use skyshot_simulation::{FireMissile, FrameSet, GameConfig, RaiseAlert};

use crate::camera::{cursor_captured, CameraControlSet, FlyCamera};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                toggle_cursor,
                quit_on_escape,
                raise_key_alert,
                // После движения камеры: ракета вылетает из актуальной позиции
                fire_on_click.after(CameraControlSet),
            )
                .in_set(FrameSet::Input),
        );
    }
}

fn toggle_cursor(
    keys: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keys.just_pressed(KeyCode::Tab) {
        return;
    }

    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    let visible = !window.cursor_options.visible;
    window.cursor_options.visible = visible;
    window.cursor_options.grab_mode = if visible {
        CursorGrabMode::None
    } else {
        CursorGrabMode::Locked
    };
}

fn quit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

fn raise_key_alert(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    mut alerts: EventWriter<RaiseAlert>,
) {
    if keys.just_pressed(KeyCode::KeyG) {
        alerts.write(RaiseAlert::new(
            config.alerts.key_alert_text.clone(),
            config.alerts.key_alert_lifetime,
        ));
    }
}

fn fire_on_click(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera: Query<&Transform, With<FlyCamera>>,
    mut fire: EventWriter<FireMissile>,
) {
    if !mouse_buttons.just_released(MouseButton::Left) || !cursor_captured(&windows) {
        return;
    }

    let Ok(transform) = camera.single() else {
        return;
    };

    fire.write(FireMissile {
        origin: transform.translation,
        direction: transform.forward().as_vec3(),
    });
}
