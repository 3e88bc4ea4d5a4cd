use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use skyshot_simulation::{CameraSettings, FrameSet, GameConfig};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (fly_camera_movement, fly_camera_look, fly_camera_zoom)
                .chain()
                .in_set(CameraControlSet)
                .in_set(FrameSet::Input),
        );
    }
}

/// Camera control systems (movement, look, zoom)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraControlSet;

/// Fly-through camera state. Angles are in degrees.
///
/// Positive yaw turns right, positive pitch looks down (mouse Y grows downwards).
#[derive(Component, Debug, Clone)]
pub struct FlyCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub base_fov: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
            base_fov: std::f32::consts::FRAC_PI_4,
        }
    }
}

/// Zoom never drops to zero or below (fov would blow up)
pub const MIN_ZOOM: f32 = 0.1;

impl FlyCamera {
    /// Camera looking along `direction`
    pub fn looking_along(direction: Vec3) -> Self {
        let dir = direction.normalize_or(Vec3::NEG_Z);
        Self {
            yaw: dir.x.atan2(-dir.z).to_degrees(),
            pitch: (-dir.y).clamp(-1.0, 1.0).asin().to_degrees(),
            ..default()
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -self.yaw.to_radians(),
            -self.pitch.to_radians(),
            0.0,
        )
    }

    /// Apply mouse motion (pixels). Pitch is clamped to ±90°.
    pub fn look(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw += sensitivity * delta.x;
        self.pitch = (self.pitch + sensitivity * delta.y).clamp(-90.0, 90.0);
    }

    pub fn zoom_by(&mut self, roll: f32, step: f32) {
        self.zoom = (self.zoom + roll * step).max(MIN_ZOOM);
    }

    pub fn fov(&self) -> f32 {
        self.base_fov / self.zoom
    }
}

/// Pressed movement keys, sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub fast: bool,
}

impl MoveKeys {
    pub fn from_input(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            forward: keys.pressed(KeyCode::KeyW),
            back: keys.pressed(KeyCode::KeyS),
            left: keys.pressed(KeyCode::KeyA),
            right: keys.pressed(KeyCode::KeyD),
            fast: keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        }
    }

    /// Camera-local translation for this frame
    pub fn local_translation(&self, settings: &CameraSettings, dt: f32) -> Vec3 {
        let mut speed = settings.move_speed;
        if self.fast {
            speed *= settings.fast_multiplier;
        }

        let mut step = Vec3::ZERO;
        if self.forward {
            step += Vec3::NEG_Z;
        }
        if self.back {
            step += Vec3::Z;
        }
        if self.left {
            step += Vec3::NEG_X;
        }
        if self.right {
            step += Vec3::X;
        }

        step * speed * dt
    }
}

/// Mouse look and WASD only work while the cursor is hidden (Tab)
pub fn cursor_captured(windows: &Query<&Window, With<PrimaryWindow>>) -> bool {
    windows
        .single()
        .map(|window| !window.cursor_options.visible)
        .unwrap_or(false)
}

fn fly_camera_movement(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<&mut Transform, With<FlyCamera>>,
) {
    if !cursor_captured(&windows) {
        return;
    }

    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    let local = MoveKeys::from_input(&keys).local_translation(&config.camera, time.delta_secs());
    let world = transform.rotation * local;
    transform.translation += world;
}

fn fly_camera_look(
    config: Res<GameConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut query: Query<(&mut FlyCamera, &mut Transform)>,
) {
    if !cursor_captured(&windows) {
        // Consume motion events even when not looking
        mouse_motion.clear();
        return;
    }

    let delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }

    for (mut camera, mut transform) in query.iter_mut() {
        camera.look(delta, config.camera.mouse_sensitivity);
        transform.rotation = camera.rotation();
    }
}

fn fly_camera_zoom(
    config: Res<GameConfig>,
    mut mouse_wheel: EventReader<MouseWheel>,
    mut query: Query<(&mut FlyCamera, &mut Projection)>,
) {
    let roll: f32 = mouse_wheel.read().map(|wheel| wheel.y).sum();
    if roll == 0.0 {
        return;
    }

    for (mut camera, mut projection) in query.iter_mut() {
        camera.zoom_by(roll, config.camera.zoom_step);
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = camera.fov();
        }
    }
}
