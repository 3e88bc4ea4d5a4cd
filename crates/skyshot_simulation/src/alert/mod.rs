//! Alert domain — временные уведомления на экране
//!
//! Содержит:
//! - AlertController (Resource, владелец текстов и таймеров)
//! - RaiseAlert / AlertRaised / AlertExpired (events)
//! - raise_alerts, check_alerts (systems)

use bevy::prelude::*;

pub mod controller;
pub mod events;
pub mod systems;

#[cfg(test)]
mod controller_tests;

pub use controller::{Alert, AlertController, AlertId};
pub use events::{AlertExpired, AlertRaised, RaiseAlert};

use crate::FrameSet;

/// Alert Plugin
///
/// Порядок выполнения (FrameSet::Simulation, после ракет):
/// 1. raise_alerts — RaiseAlert intents → create_alert
/// 2. check_alerts — тик таймеров + удаление истёкших
pub struct AlertPlugin;

impl Plugin for AlertPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AlertController>()
            .add_event::<RaiseAlert>()
            .add_event::<AlertRaised>()
            .add_event::<AlertExpired>()
            .add_systems(
                Update,
                (systems::raise_alerts, systems::check_alerts)
                    .chain()
                    .in_set(FrameSet::Simulation)
                    .after(crate::missile::systems::advance_missiles),
            );
    }
}
