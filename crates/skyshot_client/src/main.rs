use bevy::prelude::*;
use bevy::window::{MonitorSelection, WindowMode};
use skyshot_simulation::logger::set_logger;
use skyshot_simulation::{init_logger, log_warning, EngineParameters, GameConfig, SimulationPlugin};

mod alerts;
mod camera;
mod fire;
mod hud;
mod input;
mod logger;
mod preview;
mod rendering;
mod scene;

use alerts::AlertPresenterPlugin;
use camera::CameraPlugin;
use fire::FirePlugin;
use hud::HudPlugin;
use input::InputPlugin;
use logger::BevyLogPrinter;
use preview::PreviewPlugin;
use rendering::MissileRenderingPlugin;
use scene::ScenePlugin;

fn main() {
    // Конфиг читается до старта LogPlugin: предупреждения идут в консоль
    init_logger();
    let config = match GameConfig::load(&GameConfig::default_path()) {
        Ok(config) => config,
        Err(err) => {
            log_warning(&format!("{}, using defaults", err));
            GameConfig::default()
        }
    };

    // Simulation logs → Bevy tracing
    set_logger(Box::new(BevyLogPrinter));

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary_window(&config.engine)),
            ..default()
        }))
        // Config before SimulationPlugin: missile settings are read at build
        .insert_resource(config)
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        // World, camera rig and input
        .add_plugins((ScenePlugin, CameraPlugin, InputPlugin, FirePlugin))
        // Controllers → visuals
        .add_plugins((MissileRenderingPlugin, AlertPresenterPlugin))
        // Overlays
        .add_plugins((PreviewPlugin, HudPlugin))
        .run();
}

fn primary_window(engine: &EngineParameters) -> Window {
    let mode = if engine.full_screen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Primary)
    } else {
        WindowMode::Windowed
    };

    Window {
        title: "SKYSHOT".to_string(),
        resolution: (engine.window_width as f32, engine.window_height as f32).into(),
        resizable: engine.window_resizable,
        mode,
        ..default()
    }
}
