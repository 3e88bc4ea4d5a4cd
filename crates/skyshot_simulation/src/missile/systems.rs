//! Missile systems (Update, FrameSet::Simulation)

use bevy::prelude::*;

use super::controller::MissileController;
use super::events::{FireMissile, MissileExpired, MissileLaunched};
use crate::logger;

/// Система: FireMissile → MissileController::spawn
///
/// Вырожденное направление — баг вызывающего, логируем и пропускаем.
pub fn launch_missiles(
    mut fire_events: EventReader<FireMissile>,
    mut controller: ResMut<MissileController>,
    mut launched_events: EventWriter<MissileLaunched>,
) {
    for fire in fire_events.read() {
        match controller.spawn(fire.origin, fire.direction) {
            Ok(id) => {
                let direction = controller
                    .get(id)
                    .map(|missile| missile.direction)
                    .unwrap_or(fire.direction);

                logger::log(&format!(
                    "Missile {:?} launched: origin={:?} dir={:?}",
                    id, fire.origin, direction
                ));

                launched_events.write(MissileLaunched {
                    id,
                    origin: fire.origin,
                    direction,
                });
            }
            Err(err) => {
                logger::log_warning(&format!("FireMissile ignored: {}", err));
            }
        }
    }
}

/// Система: сдвинуть ракеты на frame delta, отлетавшие → MissileExpired
pub fn advance_missiles(
    time: Res<Time>,
    mut controller: ResMut<MissileController>,
    mut expired_events: EventWriter<MissileExpired>,
) {
    let expired = controller.advance(time.delta_secs());

    for missile in expired {
        logger::log(&format!(
            "Missile {:?} expired after {:.2}m",
            missile.id,
            missile.distance_travelled()
        ));

        expired_events.write(MissileExpired {
            id: missile.id,
            position: missile.position,
            distance: missile.distance_travelled(),
        });
    }
}
