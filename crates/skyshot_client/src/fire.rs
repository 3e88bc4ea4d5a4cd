//! Fire particle emitter (процедурные частицы, без ассетов)
//!
//! Частицы — дочерние entity эмиттера, живут в его локальном пространстве.

use bevy::prelude::*;
use rand::Rng;
use skyshot_simulation::{DeterministicRng, FrameSet};

pub struct FirePlugin;

impl Plugin for FirePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_fire).add_systems(
            Update,
            (emit_fire_particles, update_fire_particles)
                .chain()
                .in_set(FrameSet::Presentation),
        );
    }
}

pub const FIRE_POSITION: Vec3 = Vec3::new(0.0, 10.0, 10.0);
pub const FIRE_SCALE: Vec3 = Vec3::new(5.0, 6.0, 6.0);
pub const FIRE_MAX_PARTICLES: usize = 100;

/// Emission state; particles/second are capped by `max_particles` alive
#[derive(Component, Debug, Clone)]
pub struct FireEmitter {
    pub rate: f32,
    pub max_particles: usize,
    pub lifetime: f32,
    accumulator: f32,
}

impl Default for FireEmitter {
    fn default() -> Self {
        Self {
            rate: 60.0,
            max_particles: FIRE_MAX_PARTICLES,
            lifetime: 1.5,
            accumulator: 0.0,
        }
    }
}

impl FireEmitter {
    /// How many particles to emit this frame, given `live` already alive
    pub fn tick(&mut self, dt: f32, live: usize) -> usize {
        self.accumulator += self.rate * dt.max(0.0);
        let due = self.accumulator.floor();
        self.accumulator -= due;

        (due as usize).min(self.max_particles.saturating_sub(live))
    }
}

#[derive(Component, Debug, Clone)]
pub struct FireParticle {
    pub velocity: Vec3,
    pub remaining: f32,
    pub lifetime: f32,
}

impl FireParticle {
    pub fn new(velocity: Vec3, lifetime: f32) -> Self {
        Self {
            velocity,
            remaining: lifetime,
            lifetime,
        }
    }

    /// Advance by `dt`; returns false once the particle has burnt out
    pub fn step(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining > 0.0
    }

    /// Visual size shrinks linearly towards the end of life
    pub fn size(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        (self.remaining / self.lifetime).clamp(0.0, 1.0)
    }
}

#[derive(Resource)]
pub struct FireAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

fn setup_fire(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(FireAssets {
        mesh: meshes.add(Sphere::new(0.05)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.45, 0.1, 0.6),
            emissive: LinearRgba::rgb(4.0, 1.2, 0.2),
            unlit: true,
            alpha_mode: AlphaMode::Add,
            ..default()
        }),
    });

    commands.spawn((
        Name::new("Fire"),
        FireEmitter::default(),
        Transform::from_translation(FIRE_POSITION).with_scale(FIRE_SCALE),
        Visibility::default(),
    ));
}

fn emit_fire_particles(
    mut commands: Commands,
    time: Res<Time>,
    assets: Res<FireAssets>,
    mut rng: ResMut<DeterministicRng>,
    mut emitters: Query<(Entity, &mut FireEmitter)>,
    particles: Query<&ChildOf, With<FireParticle>>,
) {
    let dt = time.delta_secs();

    for (entity, mut emitter) in emitters.iter_mut() {
        let live = particles
            .iter()
            .filter(|child_of| child_of.parent() == entity)
            .count();

        let count = emitter.tick(dt, live);
        for _ in 0..count {
            let velocity = Vec3::new(
                rng.rng.gen_range(-0.05..0.05),
                rng.rng.gen_range(0.15..0.35),
                rng.rng.gen_range(-0.05..0.05),
            );
            let offset = Vec3::new(
                rng.rng.gen_range(-0.1..0.1),
                0.0,
                rng.rng.gen_range(-0.1..0.1),
            );

            commands.entity(entity).with_child((
                FireParticle::new(velocity, emitter.lifetime),
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
                Transform::from_translation(offset),
            ));
        }
    }
}

fn update_fire_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(Entity, &mut FireParticle, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut transform) in particles.iter_mut() {
        if !particle.step(dt) {
            commands.entity(entity).despawn();
            continue;
        }

        transform.translation += particle.velocity * dt;
        transform.scale = Vec3::splat(particle.size());
    }
}
