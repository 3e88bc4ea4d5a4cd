//! Missile preview — picture-in-picture viewport (top-right corner)
//!
//! Separate render layer with a rotating box, rendered by an overlay camera
//! into a 128x128 texture with transparent clear colour, shown as a UI image.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat, TextureUsages};
use bevy::render::view::RenderLayers;
use skyshot_simulation::FrameSet;

pub struct PreviewPlugin;

impl Plugin for PreviewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_missile_preview)
            .add_systems(Update, rotate_preview.in_set(FrameSet::Presentation));
    }
}

pub const PREVIEW_SIZE: u32 = 128;
pub const PREVIEW_LAYER: usize = 1;

/// Rotation rate of the preview model (degrees per second, pitch/yaw)
pub const PREVIEW_SPIN: Vec2 = Vec2::new(8.0, 16.0);

#[derive(Component)]
pub struct MissilePreview;

fn preview_target_image() -> Image {
    let size = Extent3d {
        width: PREVIEW_SIZE,
        height: PREVIEW_SIZE,
        ..default()
    };

    let mut image = Image::new_fill(
        size,
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Bgra8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.texture_descriptor.usage =
        TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST | TextureUsages::RENDER_ATTACHMENT;
    image
}

fn setup_missile_preview(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let image = images.add(preview_target_image());
    let layer = RenderLayers::layer(PREVIEW_LAYER);

    commands.spawn((
        Name::new("missilePreview"),
        MissilePreview,
        Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.6, 0.58, 0.55),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, -2.5),
        layer.clone(),
    ));

    commands.spawn((
        PointLight {
            intensity: 200_000.0,
            range: 20.0,
            ..default()
        },
        Transform::from_xyz(1.5, 2.0, 0.5),
        layer.clone(),
    ));

    // Overlay camera renders before the main one, straight into the texture
    commands.spawn((
        Name::new("Overlay Camera"),
        Camera3d::default(),
        Camera {
            order: -1,
            target: image.clone().into(),
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::from(PerspectiveProjection {
            far: 300.0,
            ..default()
        }),
        Transform::IDENTITY,
        layer,
    ));

    commands.spawn((
        Name::new("Missile Display"),
        ImageNode::new(image),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            right: Val::Px(0.0),
            width: Val::Px(PREVIEW_SIZE as f32),
            height: Val::Px(PREVIEW_SIZE as f32),
            ..default()
        },
    ));
}

/// Local-space spin for a frame of `dt` seconds
pub fn preview_spin(dt: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        (PREVIEW_SPIN.y * dt).to_radians(),
        (PREVIEW_SPIN.x * dt).to_radians(),
        0.0,
    )
}

fn rotate_preview(time: Res<Time>, mut query: Query<&mut Transform, With<MissilePreview>>) {
    let spin = preview_spin(time.delta_secs());
    for mut transform in query.iter_mut() {
        transform.rotate_local(spin);
    }
}
