//! Alert events

use bevy::prelude::*;

use super::controller::AlertId;

/// Intent: показать алерт на `lifetime` секунд
#[derive(Event, Debug, Clone)]
pub struct RaiseAlert {
    pub text: String,
    pub lifetime: f32,
}

impl RaiseAlert {
    pub fn new(text: impl Into<String>, lifetime: f32) -> Self {
        Self {
            text: text.into(),
            lifetime,
        }
    }
}

/// Алерт принят контроллером — клиент создаёт виджет
#[derive(Event, Debug, Clone)]
pub struct AlertRaised {
    pub id: AlertId,
    pub text: String,
}

/// Алерт истёк — клиент удаляет виджет
#[derive(Event, Debug, Clone)]
pub struct AlertExpired {
    pub id: AlertId,
}
