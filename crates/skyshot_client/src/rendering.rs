use std::collections::HashMap;

use bevy::prelude::*;
use skyshot_simulation::{FrameSet, MissileController, MissileExpired, MissileId, MissileLaunched};

pub struct MissileRenderingPlugin;

impl Plugin for MissileRenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MissileVisualRegistry>()
            .add_systems(Startup, setup_missile_assets)
            .add_systems(
                Update,
                (
                    spawn_missile_visuals,
                    sync_missile_transforms,
                    despawn_expired_missiles,
                )
                    .chain()
                    .in_set(FrameSet::Presentation),
            );
    }
}

/// Link: visual entity → simulation missile
#[derive(Component)]
pub struct MissileVisual(pub MissileId);

/// Shared mesh/material for every missile
#[derive(Resource)]
pub struct MissileAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// MissileId → visual entity. The controller never sees entities.
#[derive(Resource, Default)]
pub struct MissileVisualRegistry {
    pub visuals: HashMap<MissileId, Entity>,
}

fn setup_missile_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(MissileAssets {
        mesh: meshes.add(Cuboid::new(0.3, 0.3, 1.2)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.55, 0.5),
            emissive: LinearRgba::rgb(1.5, 0.6, 0.1),
            perceptual_roughness: 0.8,
            ..default()
        }),
    });
}

/// Missile transform: at `position`, long axis (-Z) along `direction`
pub fn missile_transform(position: Vec3, direction: Vec3) -> Transform {
    Transform::from_translation(position).looking_to(direction, up_for(direction))
}

/// looking_to degenerates when direction is parallel to up
fn up_for(direction: Vec3) -> Vec3 {
    if direction.normalize_or_zero().dot(Vec3::Y).abs() > 0.999 {
        Vec3::Z
    } else {
        Vec3::Y
    }
}

/// Spawn visual representation (box mesh) for newly launched missiles
fn spawn_missile_visuals(
    mut commands: Commands,
    mut launched: EventReader<MissileLaunched>,
    assets: Res<MissileAssets>,
    mut registry: ResMut<MissileVisualRegistry>,
) {
    for event in launched.read() {
        let entity = commands
            .spawn((
                Name::new(format!("Missile {}", event.id.0)),
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
                missile_transform(event.origin, event.direction),
                MissileVisual(event.id),
            ))
            .id();

        registry.visuals.insert(event.id, entity);
    }
}

/// Sync simulation positions → visual transforms
fn sync_missile_transforms(
    controller: Res<MissileController>,
    mut visuals: Query<(&MissileVisual, &mut Transform)>,
) {
    if !controller.is_changed() {
        return;
    }

    for (visual, mut transform) in visuals.iter_mut() {
        if let Some(missile) = controller.get(visual.0) {
            *transform = missile_transform(missile.position, missile.direction);
        }
    }
}

/// Release visuals of missiles the controller removed
fn despawn_expired_missiles(
    mut commands: Commands,
    mut expired: EventReader<MissileExpired>,
    mut registry: ResMut<MissileVisualRegistry>,
) {
    for event in expired.read() {
        if let Some(entity) = registry.visuals.remove(&event.id) {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missile_transform_faces_direction() {
        let transform = missile_transform(Vec3::ONE, Vec3::X);
        assert_eq!(transform.translation, Vec3::ONE);
        assert!((transform.forward().as_vec3() - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_missile_transform_straight_up() {
        let transform = missile_transform(Vec3::ZERO, Vec3::Y);
        assert!((transform.forward().as_vec3() - Vec3::Y).length() < 1e-5);
        assert!(transform.rotation.is_finite());
    }
}
