//! Конфигурация: окно, ракеты, алерты, камера
//!
//! Загружается из JSON (`skyshot.json` или путь из `SKYSHOT_CONFIG`).
//! Отсутствующий файл — не ошибка, используются defaults.
//! Ключи в camelCase (`fullScreen`, `windowWidth`, ...).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SimulationError, SimulationResult};

/// Имя файла конфига по умолчанию (рядом с рабочей директорией)
pub const DEFAULT_CONFIG_FILE: &str = "skyshot.json";

/// Env var для переопределения пути к конфигу
pub const CONFIG_PATH_ENV: &str = "SKYSHOT_CONFIG";

/// Параметры окна (передаются в WindowPlugin клиента)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineParameters {
    pub full_screen: bool,
    pub window_width: u32,
    pub window_height: u32,
    pub window_resizable: bool,
}

impl Default for EngineParameters {
    fn default() -> Self {
        Self {
            full_screen: false,
            window_width: 1920,
            window_height: 1080,
            window_resizable: true,
        }
    }
}

/// Параметры ракет: скорость и максимальный возраст
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MissileSettings {
    /// Скорость (м/с)
    pub speed: f32,
    /// Время жизни (секунды). Ракета удаляется на тике, где age >= max_age
    pub max_age: f32,
}

impl Default for MissileSettings {
    fn default() -> Self {
        Self {
            speed: 30.0,
            max_age: 5.0,
        }
    }
}

impl MissileSettings {
    /// Максимальная дистанция полёта до удаления
    pub fn max_distance(&self) -> f32 {
        self.speed * self.max_age
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertSettings {
    /// Текст алерта по клавише [G]
    pub key_alert_text: String,
    pub key_alert_lifetime: f32,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            key_alert_text: "G was pressed!".to_string(),
            key_alert_lifetime: 3.0,
        }
    }
}

/// Fly-through камера
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraSettings {
    /// Units per second
    pub move_speed: f32,
    /// Множитель скорости с зажатым Shift
    pub fast_multiplier: f32,
    /// Градусов на пиксель движения мыши
    pub mouse_sensitivity: f32,
    /// Шаг zoom на одно деление колеса
    pub zoom_step: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            fast_multiplier: 10.0,
            mouse_sensitivity: 0.1,
            zoom_step: 0.1,
        }
    }
}

/// Полный конфиг игры (Resource)
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub engine: EngineParameters,
    pub missiles: MissileSettings,
    pub alerts: AlertSettings,
    pub camera: CameraSettings,
}

impl GameConfig {
    /// Путь к конфигу: `SKYSHOT_CONFIG` или `skyshot.json`
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Загрузить конфиг. Нет файла → defaults, битый файл → ошибка
    pub fn load(path: &Path) -> SimulationResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| SimulationError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|err| match err {
            SimulationError::ConfigParse { source, .. } => SimulationError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_json(raw: &str) -> SimulationResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| SimulationError::ConfigParse {
                path: PathBuf::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Сериализация plain struct без map-ключей не падает
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> SimulationResult<()> {
        let positive = |value: f32, name: &str| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimulationError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )))
            }
        };

        positive(self.missiles.speed, "missiles.speed")?;
        positive(self.missiles.max_age, "missiles.maxAge")?;
        positive(self.alerts.key_alert_lifetime, "alerts.keyAlertLifetime")?;
        positive(self.camera.move_speed, "camera.moveSpeed")?;
        positive(self.camera.fast_multiplier, "camera.fastMultiplier")?;

        if self.engine.window_width == 0 || self.engine.window_height == 0 {
            return Err(SimulationError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.engine.window_width, self.engine.window_height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_demo() {
        let config = GameConfig::default();
        assert!(!config.engine.full_screen);
        assert_eq!(config.engine.window_width, 1920);
        assert_eq!(config.engine.window_height, 1080);
        assert!(config.engine.window_resizable);
        assert_eq!(config.alerts.key_alert_text, "G was pressed!");
        assert_eq!(config.alerts.key_alert_lifetime, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(
            r#"{ "engine": { "fullScreen": true, "windowWidth": 800 } }"#,
        )
        .unwrap();

        assert!(config.engine.full_screen);
        assert_eq!(config.engine.window_width, 800);
        assert_eq!(config.engine.window_height, 1080);
        assert_eq!(config.missiles, MissileSettings::default());
    }

    #[test]
    fn test_rejects_non_positive_missile_speed() {
        let err = GameConfig::from_json(r#"{ "missiles": { "speed": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_window() {
        let err = GameConfig::from_json(r#"{ "engine": { "windowHeight": 0 } }"#).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "missiles": {{ "speed": 12.5, "maxAge": 2.0 }} }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.missiles.speed, 12.5);
        assert_eq!(config.missiles.max_distance(), 25.0);
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        match GameConfig::load(file.path()) {
            Err(SimulationError::ConfigParse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected ConfigParse, got {:?}", other),
        }
    }

    #[test]
    fn test_json_round_trip_keeps_camel_case() {
        let json = GameConfig::default().to_json();
        assert!(json.contains("\"windowResizable\""));
        assert_eq!(GameConfig::from_json(&json).unwrap(), GameConfig::default());
    }
}
