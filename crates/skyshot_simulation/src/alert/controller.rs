//! AlertController — временные текстовые уведомления
//!
//! Контроллер хранит только текст и оставшееся время.
//! Виджеты алертов создаёт и удаляет клиент (по AlertId).

use bevy::prelude::*;

use crate::logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct AlertId(pub u64);

/// Алерт
///
/// Инвариант: remaining > 0 пока алерт хранится в контроллере
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    pub text: String,
    /// Оставшееся время жизни (секунды)
    pub remaining: f32,
}

#[derive(Resource, Debug, Default)]
pub struct AlertController {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Создать алерт на `lifetime` секунд
    ///
    /// `lifetime <= 0` (или NaN) — алерт уже истёк, ничего не показываем
    /// и возвращаем None.
    pub fn create_alert(&mut self, text: impl Into<String>, lifetime: f32) -> Option<AlertId> {
        let text = text.into();

        if lifetime.is_nan() || lifetime <= 0.0 {
            logger::log_warning(&format!(
                "Alert {:?} dropped: non-positive lifetime {}",
                text, lifetime
            ));
            return None;
        }

        let id = AlertId(self.next_id);
        self.next_id += 1;

        self.alerts.push(Alert {
            id,
            text,
            remaining: lifetime,
        });

        Some(id)
    }

    /// Уменьшить remaining у всех алертов на `dt`, удалить истёкшие (remaining <= 0)
    ///
    /// Удаление по предикату, не FIFO. Возвращает удалённые алерты.
    pub fn check_alerts(&mut self, dt: f32) -> Vec<Alert> {
        debug_assert!(dt >= 0.0, "negative time step: {}", dt);
        let dt = dt.max(0.0);

        if self.alerts.is_empty() {
            return Vec::new();
        }

        let mut expired = Vec::new();
        self.alerts.retain_mut(|alert| {
            alert.remaining -= dt;
            if alert.remaining <= 0.0 {
                expired.push(alert.clone());
                false
            } else {
                true
            }
        });

        expired
    }

    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }

    /// Активные алерты в порядке создания
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
