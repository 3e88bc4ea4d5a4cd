//! Missile domain — прямолетящие ракеты с ограниченным временем жизни
//!
//! Содержит:
//! - MissileController (Resource, владелец simulation state)
//! - FireMissile / MissileLaunched / MissileExpired (events)
//! - launch_missiles, advance_missiles (systems)
//!
//! Визуалы ракет живут в клиенте и связаны с контроллером через MissileId.

use bevy::prelude::*;

pub mod controller;
pub mod events;
pub mod systems;

#[cfg(test)]
mod controller_tests;

pub use controller::{Missile, MissileController, MissileId};
pub use events::{FireMissile, MissileExpired, MissileLaunched};

use crate::config::GameConfig;
use crate::FrameSet;

/// Missile Plugin
///
/// Порядок выполнения (FrameSet::Simulation):
/// 1. launch_missiles — FireMissile intents → spawn
/// 2. advance_missiles — движение + удаление по возрасту
pub struct MissilePlugin;

impl Plugin for MissilePlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<GameConfig>()
            .map(|config| config.missiles)
            .unwrap_or_default();

        app.insert_resource(MissileController::new(settings))
            .add_event::<FireMissile>()
            .add_event::<MissileLaunched>()
            .add_event::<MissileExpired>()
            .add_systems(
                Update,
                (systems::launch_missiles, systems::advance_missiles)
                    .chain()
                    .in_set(FrameSet::Simulation),
            );
    }
}
