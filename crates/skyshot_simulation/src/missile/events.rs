//! Missile events
//!
//! Input → FireMissile → simulation → MissileLaunched / MissileExpired → визуалы.

use bevy::prelude::*;

use super::controller::MissileId;

/// Intent: выпустить ракету (клик мыши при скрытом курсоре)
///
/// `direction` не обязан быть нормализованным.
#[derive(Event, Debug, Clone)]
pub struct FireMissile {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Ракета добавлена в контроллер (direction уже нормализован)
#[derive(Event, Debug, Clone)]
pub struct MissileLaunched {
    pub id: MissileId,
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Ракета удалена по возрасту — клиент освобождает её визуал
#[derive(Event, Debug, Clone)]
pub struct MissileExpired {
    pub id: MissileId,
    pub position: Vec3,
    pub distance: f32,
}
