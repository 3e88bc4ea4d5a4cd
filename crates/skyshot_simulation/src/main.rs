//! Headless симуляция SKYSHOT
//!
//! Запускает Bevy App без рендера: скриптовые залпы ракет и алерты,
//! чтобы проверить жизненный цикл контроллеров без окна.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use skyshot_simulation::{
    create_headless_app, AlertController, FireMissile, GameConfig, MissileController, RaiseAlert,
};

const TICKS: u32 = 600;
const TICK: Duration = Duration::from_millis(16);

fn main() {
    let seed = 42;
    println!("Starting SKYSHOT headless simulation (seed: {})", seed);

    let config = match GameConfig::load(&GameConfig::default_path()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("WARN: {}, using defaults", err);
            GameConfig::default()
        }
    };

    let mut app = create_headless_app(seed);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK))
        .insert_resource(MissileController::new(config.missiles))
        .insert_resource(config);

    for tick in 0..TICKS {
        // Залп раз в секунду, алерт раз в 3 секунды
        if tick % 60 == 0 {
            let yaw = tick as f32 * 0.1;
            app.world_mut().send_event(FireMissile {
                origin: Vec3::new(0.0, 10.0, 0.0),
                direction: Vec3::new(yaw.cos(), -0.2, yaw.sin()),
            });
        }
        if tick % 180 == 0 {
            app.world_mut()
                .send_event(RaiseAlert::new(format!("tick {}", tick), 3.0));
        }

        app.update();

        if tick % 100 == 0 {
            let missiles = app.world().resource::<MissileController>().len();
            let alerts = app.world().resource::<AlertController>().len();
            println!("Tick {}: {} missiles, {} alerts", tick, missiles, alerts);
        }
    }

    println!("Simulation complete!");
}
