//! Frame statistics — FPS отчёт раз в секунду
//!
//! Кадры и время копятся, пока не наберётся >= 1 сек,
//! затем формируется строка отчёта и счётчики сбрасываются.

use bevy::prelude::*;

use crate::logger;
use crate::FrameSet;

/// Строка подсказки по клавишам (первая строка HUD)
pub const KEY_HELP: &str =
    "Keys: tab = toggle mouse, AWSD = move camera, Shift = fast mode, Esc = quit.";

/// Интервал отчёта (секунды)
pub const REPORT_INTERVAL: f32 = 1.0;

/// Отчёт за интервал
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frames: u32,
    pub seconds: f32,
}

impl FrameReport {
    pub fn fps(&self) -> f32 {
        self.frames as f32 / self.seconds
    }

    /// "N frames in T seconds = F fps" (каждое число обрезано до 6 символов)
    pub fn summary(&self) -> String {
        format!(
            "{} frames in {} seconds = {} fps",
            truncate6(&self.frames.to_string()),
            truncate6(&self.seconds.to_string()),
            truncate6(&self.fps().to_string()),
        )
    }

    /// Полный текст HUD: подсказка + отчёт
    pub fn hud_text(&self) -> String {
        format!("{}\n{}", KEY_HELP, self.summary())
    }
}

fn truncate6(value: &str) -> &str {
    match value.char_indices().nth(6) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[derive(Resource, Debug, Default)]
pub struct FrameStats {
    frames: u32,
    elapsed: f32,
    last_report: Option<FrameReport>,
}

impl FrameStats {
    /// Учесть кадр длительностью `dt`. Возвращает отчёт, если интервал набран
    pub fn record_frame(&mut self, dt: f32) -> Option<FrameReport> {
        self.frames += 1;
        self.elapsed += dt.max(0.0);

        if self.elapsed < REPORT_INTERVAL {
            return None;
        }

        let report = FrameReport {
            frames: self.frames,
            seconds: self.elapsed,
        };
        self.frames = 0;
        self.elapsed = 0.0;
        self.last_report = Some(report.clone());
        Some(report)
    }

    pub fn last_report(&self) -> Option<&FrameReport> {
        self.last_report.as_ref()
    }
}

/// Событие: готов новый FPS отчёт (клиент обновляет HUD)
#[derive(Event, Debug, Clone)]
pub struct FrameReportReady(pub FrameReport);

/// Система: считаем кадры, раз в секунду → FrameReportReady + лог
pub fn record_frame_stats(
    time: Res<Time>,
    mut stats: ResMut<FrameStats>,
    mut reports: EventWriter<FrameReportReady>,
) {
    if let Some(report) = stats.record_frame(time.delta_secs()) {
        logger::log_info(&report.summary());
        reports.write(FrameReportReady(report));
    }
}

pub struct FrameStatsPlugin;

impl Plugin for FrameStatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameStats>()
            .add_event::<FrameReportReady>()
            .add_systems(Update, record_frame_stats.in_set(FrameSet::Simulation));
    }
}
