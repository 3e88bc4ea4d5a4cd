//! MissileController — владелец всех летящих ракет
//!
//! Контроллер хранит только simulation state (позиция, направление, возраст).
//! Визуалы принадлежат клиенту: `advance` возвращает удалённые ракеты,
//! и клиент по их `MissileId` деспавнит свои entity.

use bevy::prelude::*;

use crate::config::MissileSettings;
use crate::error::{SimulationError, SimulationResult};

/// Стабильный handle ракеты (не переиспользуется)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct MissileId(pub u64);

/// Ракета: прямолинейное движение с постоянной скоростью
///
/// Инвариант: direction единичной длины (нормализуется в spawn),
/// age не убывает до удаления.
#[derive(Debug, Clone, PartialEq)]
pub struct Missile {
    pub id: MissileId,
    pub origin: Vec3,
    pub position: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    /// Секунд с момента spawn
    pub age: f32,
}

impl Missile {
    /// Пройденная дистанция (speed × age)
    pub fn distance_travelled(&self) -> f32 {
        self.speed * self.age
    }
}

#[derive(Resource, Debug, Default)]
pub struct MissileController {
    settings: MissileSettings,
    missiles: Vec<Missile>,
    next_id: u64,
}

impl MissileController {
    pub fn new(settings: MissileSettings) -> Self {
        Self {
            settings,
            missiles: Vec::new(),
            next_id: 0,
        }
    }

    pub fn settings(&self) -> &MissileSettings {
        &self.settings
    }

    /// Добавить ракету в `origin`, летящую вдоль нормализованного `direction`
    pub fn spawn(&mut self, origin: Vec3, direction: Vec3) -> SimulationResult<MissileId> {
        let Some(direction) = direction.try_normalize() else {
            return Err(SimulationError::DegenerateDirection { direction });
        };

        let id = MissileId(self.next_id);
        self.next_id += 1;

        self.missiles.push(Missile {
            id,
            origin,
            position: origin,
            direction,
            speed: self.settings.speed,
            age: 0.0,
        });

        Ok(id)
    }

    /// Сдвинуть все ракеты на `direction * speed * dt` и удалить отлетавшие
    ///
    /// Ракета удаляется на первом тике, где `age >= max_age`.
    /// Возвращает удалённые ракеты (для освобождения визуалов).
    pub fn advance(&mut self, dt: f32) -> Vec<Missile> {
        debug_assert!(dt >= 0.0, "negative time step: {}", dt);
        // NaN и отрицательный dt в release превращаются в 0
        let dt = dt.max(0.0);

        if self.missiles.is_empty() {
            return Vec::new();
        }

        for missile in self.missiles.iter_mut() {
            missile.position += missile.direction * missile.speed * dt;
            missile.age += dt;
        }

        let max_age = self.settings.max_age;
        let mut expired = Vec::new();
        self.missiles.retain(|missile| {
            if missile.age >= max_age {
                expired.push(missile.clone());
                false
            } else {
                true
            }
        });

        expired
    }

    pub fn get(&self, id: MissileId) -> Option<&Missile> {
        self.missiles.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Missile> {
        self.missiles.iter()
    }

    pub fn len(&self) -> usize {
        self.missiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missiles.is_empty()
    }
}
