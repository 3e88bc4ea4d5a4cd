//! SKYSHOT Simulation Core
//!
//! Headless ECS-логика на Bevy 0.16:
//! - missile: ракеты (spawn, движение, удаление по возрасту)
//! - alert: временные уведомления
//! - stats: FPS отчёт раз в секунду
//! - io: очередь фоновых задач (poll каждый кадр)
//!
//! Клиент (skyshot_client) рисует сцену и синхронизирует визуалы
//! с состоянием контроллеров через события.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod alert;
pub mod config;
pub mod error;
pub mod io;
pub mod logger;
pub mod missile;
pub mod stats;
pub mod world;

// Re-export базовых типов для удобства
pub use alert::{Alert, AlertController, AlertExpired, AlertId, AlertPlugin, AlertRaised, RaiseAlert};
pub use config::{AlertSettings, CameraSettings, EngineParameters, GameConfig, MissileSettings};
pub use error::{SimulationError, SimulationResult};
pub use io::IoContext;
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter, LOGGER_LEVEL};
pub use missile::{
    FireMissile, Missile, MissileController, MissileExpired, MissileId, MissileLaunched, MissilePlugin,
};
pub use stats::{FrameReport, FrameReportReady, FrameStats, FrameStatsPlugin};

/// Фазы кадра (Update schedule), строго по порядку:
/// Input → Simulation → Presentation
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Опрос ввода, генерация intents (FireMissile, RaiseAlert)
    Input,
    /// Контроллеры: ракеты, затем алерты, затем статистика
    Simulation,
    /// Синхронизация визуалов с состоянием контроллеров
    Presentation,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// GameConfig, если вставлен до plugin'а, задаёт параметры ракет.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::default());
        }
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Simulation, FrameSet::Presentation).chain(),
        )
        .init_resource::<IoContext>()
        .add_plugins((MissilePlugin, AlertPlugin, FrameStatsPlugin))
        // io poll — вне фаз кадра, как отдельный хук движка
        .add_systems(Update, io::poll_io_context.after(FrameSet::Presentation));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(SimulationPlugin);

    app
}
