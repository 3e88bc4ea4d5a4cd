use bevy::color::Mix;
use bevy::pbr::{CascadeShadowConfigBuilder, DistanceFog, FogFalloff};
use bevy::prelude::*;
use skyshot_simulation::world::{scatter_boxes, scatter_mushrooms, BOX_COUNT, MUSHROOM_COUNT};
use skyshot_simulation::{log_info, DeterministicRng, FrameSet};

use crate::camera::FlyCamera;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(FOG_COLOR))
            // 0.15 grey
            .insert_resource(AmbientLight {
                color: Color::srgb(0.15, 0.15, 0.15),
                brightness: 1000.0,
                affects_lightmapped_meshes: false,
            })
            .add_systems(Startup, (setup_scene, setup_camera))
            .add_systems(
                Update,
                animate_mushroom_material.in_set(FrameSet::Presentation),
            );
    }
}

const FOG_COLOR: Color = Color::srgb(0.5, 0.5, 0.7);
pub const FAR_CLIP: f32 = 300.0;

/// Linear colour animation that loops over the last keyframe time
#[derive(Debug, Clone)]
pub struct ColorKeyframes {
    keys: Vec<(f32, LinearRgba)>,
}

impl ColorKeyframes {
    /// Keys must be sorted by time; the first key should be at 0
    pub fn new(keys: Vec<(f32, LinearRgba)>) -> Self {
        Self { keys }
    }

    pub fn period(&self) -> f32 {
        self.keys.last().map(|(t, _)| *t).unwrap_or(0.0)
    }

    pub fn sample(&self, time: f32) -> LinearRgba {
        let Some(&(_, first)) = self.keys.first() else {
            return LinearRgba::BLACK;
        };

        let period = self.period();
        if period <= 0.0 {
            return first;
        }

        let t = time.rem_euclid(period);
        for pair in self.keys.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t >= t0 && t <= t1 {
                let span = (t1 - t0).max(f32::EPSILON);
                return c0.mix(&c1, (t - t0) / span);
            }
        }

        first
    }
}

/// Mushroom caps share one material whose emissive colour cycles
/// dark grey → red → yellow → dark grey over 3 seconds
#[derive(Resource)]
pub struct MushroomMaterial {
    pub handle: Handle<StandardMaterial>,
    pub animation: ColorKeyframes,
}

pub fn mushroom_keyframes() -> ColorKeyframes {
    ColorKeyframes::new(vec![
        (0.0, LinearRgba::rgb(0.1, 0.1, 0.1)),
        (1.0, LinearRgba::rgb(1.0, 0.0, 0.0)),
        (2.0, LinearRgba::rgb(1.0, 1.0, 0.0)),
        (3.0, LinearRgba::rgb(0.1, 0.1, 0.1)),
    ])
}

/// Spawn ground plane, mushrooms, boxes and the sun
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<DeterministicRng>,
) {
    // Ground plane (200x200m)
    commands.spawn((
        Name::new("Plane"),
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(100.0)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.42, 0.4, 0.38),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::IDENTITY,
    ));

    // Mushrooms: stem + cap, caps share the animated material
    let stem_mesh = meshes.add(Cylinder::new(0.08, 0.5));
    let cap_mesh = meshes.add(Sphere::new(0.3));
    let stem_material = materials.add(Color::srgb(0.9, 0.88, 0.8));
    let animation = mushroom_keyframes();
    let cap_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.25, 0.2),
        emissive: animation.sample(0.0),
        ..default()
    });
    commands.insert_resource(MushroomMaterial {
        handle: cap_material.clone(),
        animation,
    });

    for placement in scatter_mushrooms(&mut rng, MUSHROOM_COUNT) {
        commands
            .spawn((Name::new("Mushroom"), placement.transform(), Visibility::default()))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(stem_mesh.clone()),
                    MeshMaterial3d(stem_material.clone()),
                    Transform::from_xyz(0.0, 0.25, 0.0),
                ));
                parent.spawn((
                    Mesh3d(cap_mesh.clone()),
                    MeshMaterial3d(cap_material.clone()),
                    Transform::from_xyz(0.0, 0.5, 0.0).with_scale(Vec3::new(1.0, 0.5, 1.0)),
                ));
            });
    }

    // Boxes of random size resting on the ground
    let box_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let stone = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.58, 0.55),
        perceptual_roughness: 0.9,
        ..default()
    });
    let boxes = scatter_boxes(&mut rng, BOX_COUNT);
    let large = boxes.iter().filter(|b| b.is_large()).count();
    for placement in &boxes {
        commands.spawn((
            Name::new("Box"),
            Mesh3d(box_mesh.clone()),
            MeshMaterial3d(stone.clone()),
            placement.transform(),
        ));
    }

    // Directional light (sun) with cascaded shadows
    commands.spawn((
        Name::new("DirectionalLight"),
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::default().looking_to(Vec3::new(0.6, -1.0, 0.8), Vec3::Y),
        CascadeShadowConfigBuilder {
            num_cascades: 3,
            first_cascade_far_bound: 10.0,
            maximum_distance: 200.0,
            ..default()
        }
        .build(),
    ));

    log_info(&format!(
        "Scene ready: {} mushrooms, {} boxes ({} large), seed {}",
        MUSHROOM_COUNT,
        boxes.len(),
        large,
        rng.seed
    ));
}

/// Main camera at (0, 10, 0) looking along (1, -1, 0), with a green spot light
fn setup_camera(mut commands: Commands) {
    let fly = FlyCamera::looking_along(Vec3::new(1.0, -1.0, 0.0));
    let rotation = fly.rotation();

    commands
        .spawn((
            Name::new("Camera"),
            Camera3d::default(),
            Projection::from(PerspectiveProjection {
                fov: fly.fov(),
                far: FAR_CLIP,
                ..default()
            }),
            Transform::from_xyz(0.0, 10.0, 0.0).with_rotation(rotation),
            DistanceFog {
                color: FOG_COLOR,
                falloff: FogFalloff::Linear {
                    start: 100.0,
                    end: FAR_CLIP,
                },
                ..default()
            },
            IsDefaultUiCamera,
            fly,
        ))
        .with_children(|parent| {
            parent.spawn((
                SpotLight {
                    range: 20.0,
                    color: Color::srgb(0.6, 1.0, 0.6),
                    intensity: 2_800_000.0,
                    outer_angle: 12.5_f32.to_radians(),
                    inner_angle: 9.0_f32.to_radians(),
                    ..default()
                },
                // Point slightly downwards
                Transform::from_rotation(Quat::from_rotation_x(-15.0_f32.to_radians())),
            ));
        });
}

fn animate_mushroom_material(
    time: Res<Time>,
    mushroom: Res<MushroomMaterial>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if let Some(material) = materials.get_mut(&mushroom.handle) {
        material.emissive = mushroom.animation.sample(time.elapsed_secs());
    }
}
