//! BevyLogPrinter — мост simulation logger → Bevy tracing (LogPlugin)

use bevy::log::{debug, error, info, warn};
use skyshot_simulation::{LogLevel, LogPrinter};

pub struct BevyLogPrinter;

impl LogPrinter for BevyLogPrinter {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!("{}", message),
            LogLevel::Info => info!("{}", message),
            LogLevel::Warning => warn!("{}", message),
            LogLevel::Error => error!("{}", message),
        }
    }
}
