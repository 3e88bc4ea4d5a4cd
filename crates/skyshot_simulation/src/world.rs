//! Декорации мира: детерминированный scatter грибов и ящиков
//!
//! Раскладка считается из DeterministicRng, поэтому один seed
//! даёт одну и ту же сцену в клиенте и в тестах.

use bevy::prelude::*;
use rand::Rng;

use crate::DeterministicRng;

pub const MUSHROOM_COUNT: usize = 240;
pub const BOX_COUNT: usize = 20;

/// Ящики от этого размера считаются крупными (occluder в оригинальной сцене)
pub const LARGE_BOX_SIZE: f32 = 3.0;

/// Размещение одного пропа на плоскости
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropPlacement {
    pub position: Vec3,
    /// Поворот вокруг Y (градусы)
    pub yaw_degrees: f32,
    /// Uniform scale (для ящиков — длина ребра)
    pub scale: f32,
}

impl PropPlacement {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position)
            .with_rotation(Quat::from_rotation_y(self.yaw_degrees.to_radians()))
            .with_scale(Vec3::splat(self.scale))
    }

    pub fn is_large(&self) -> bool {
        self.scale >= LARGE_BOX_SIZE
    }
}

/// Грибы: x,z в [-45, 45), случайный yaw, scale в [0.5, 2.5)
pub fn scatter_mushrooms(rng: &mut DeterministicRng, count: usize) -> Vec<PropPlacement> {
    (0..count)
        .map(|_| {
            let x = rng.rng.gen_range(-45.0..45.0);
            let z = rng.rng.gen_range(-45.0..45.0);
            PropPlacement {
                position: Vec3::new(x, 0.0, z),
                yaw_degrees: rng.rng.gen_range(0.0..360.0),
                scale: 0.5 + rng.rng.gen_range(0.0..2.0),
            }
        })
        .collect()
}

/// Ящики: ребро в [1, 11), x,z в [-40, 40), стоят на земле (y = size/2)
pub fn scatter_boxes(rng: &mut DeterministicRng, count: usize) -> Vec<PropPlacement> {
    (0..count)
        .map(|_| {
            let size = 1.0 + rng.rng.gen_range(0.0..10.0);
            let x = rng.rng.gen_range(-40.0..40.0);
            let z = rng.rng.gen_range(-40.0..40.0);
            PropPlacement {
                position: Vec3::new(x, size * 0.5, z),
                yaw_degrees: 0.0,
                scale: size,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mushrooms_within_bounds() {
        let mut rng = DeterministicRng::new(7);
        let mushrooms = scatter_mushrooms(&mut rng, MUSHROOM_COUNT);

        assert_eq!(mushrooms.len(), MUSHROOM_COUNT);
        for m in &mushrooms {
            assert!(m.position.x >= -45.0 && m.position.x < 45.0);
            assert!(m.position.z >= -45.0 && m.position.z < 45.0);
            assert_eq!(m.position.y, 0.0);
            assert!(m.scale >= 0.5 && m.scale < 2.5);
            assert!(m.yaw_degrees >= 0.0 && m.yaw_degrees < 360.0);
        }
    }

    #[test]
    fn test_boxes_rest_on_ground() {
        let mut rng = DeterministicRng::new(7);
        let boxes = scatter_boxes(&mut rng, BOX_COUNT);

        assert_eq!(boxes.len(), BOX_COUNT);
        for b in &boxes {
            assert!(b.scale >= 1.0 && b.scale < 11.0);
            assert!((b.position.y - b.scale * 0.5).abs() < 1e-6);
            assert!(b.position.x >= -40.0 && b.position.x < 40.0);
        }
    }

    #[test]
    fn test_scatter_same_seed_same_layout() {
        let a = scatter_mushrooms(&mut DeterministicRng::new(42), 16);
        let b = scatter_mushrooms(&mut DeterministicRng::new(42), 16);
        assert_eq!(a, b);

        let c = scatter_mushrooms(&mut DeterministicRng::new(43), 16);
        assert_ne!(a, c);
    }

    #[test]
    fn test_large_box_threshold() {
        let small = PropPlacement {
            position: Vec3::ZERO,
            yaw_degrees: 0.0,
            scale: 2.9,
        };
        let large = PropPlacement { scale: 3.0, ..small };

        assert!(!small.is_large());
        assert!(large.is_large());
    }

    #[test]
    fn test_transform_applies_scale_and_yaw() {
        let placement = PropPlacement {
            position: Vec3::new(1.0, 0.0, 2.0),
            yaw_degrees: 90.0,
            scale: 2.0,
        };
        let transform = placement.transform();

        assert_eq!(transform.translation, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(transform.scale, Vec3::splat(2.0));
        let rotated = transform.rotation * Vec3::X;
        assert!((rotated - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }
}
