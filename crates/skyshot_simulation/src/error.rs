//! Ошибки симуляции и загрузки конфига

use bevy::prelude::Vec3;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// Направление нулевой длины (или NaN) — нормализовать нечего
    #[error("missile direction {direction:?} cannot be normalized")]
    DegenerateDirection { direction: Vec3 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type SimulationResult<T> = Result<T, SimulationError>;
