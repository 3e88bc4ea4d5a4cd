//! Alert systems (Update, FrameSet::Simulation)

use bevy::prelude::*;

use super::controller::AlertController;
use super::events::{AlertExpired, AlertRaised, RaiseAlert};
use crate::logger;

/// Система: RaiseAlert → AlertController::create_alert
pub fn raise_alerts(
    mut raise_events: EventReader<RaiseAlert>,
    mut controller: ResMut<AlertController>,
    mut raised_events: EventWriter<AlertRaised>,
) {
    for raise in raise_events.read() {
        if let Some(id) = controller.create_alert(raise.text.clone(), raise.lifetime) {
            logger::log_info(&format!(
                "Alert {:?} raised: {:?} ({:.1}s)",
                id, raise.text, raise.lifetime
            ));
            raised_events.write(AlertRaised {
                id,
                text: raise.text.clone(),
            });
        }
    }
}

/// Система: тикаем алерты на frame delta, истёкшие → AlertExpired
pub fn check_alerts(
    time: Res<Time>,
    mut controller: ResMut<AlertController>,
    mut expired_events: EventWriter<AlertExpired>,
) {
    for alert in controller.check_alerts(time.delta_secs()) {
        logger::log(&format!("Alert {:?} expired: {:?}", alert.id, alert.text));
        expired_events.write(AlertExpired { id: alert.id });
    }
}
