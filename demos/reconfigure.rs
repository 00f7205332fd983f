//! Reconfiguration: swap the manager and watch existing loggers follow

use rust_logger_bridge::prelude::*;
use rust_logger_bridge::{debug, info};
use std::sync::Arc;

fn main() -> Result<()> {
    let quiet = BackendManager::new(BackendConfig::new(Level::Info))
        .with_appender(Box::new(ConsoleAppender::new()));
    let appenders = quiet.appenders();
    let registry = AdapterRegistry::new(Arc::new(quiet));

    let logger = registry.get_logger("demo.reload")?;
    debug!(logger, "invisible: {}", "debug is off")?;
    info!(logger, "debug enabled: {}", logger.is_debug_enabled())?;

    let verbose = BackendManager::with_shared_appenders(
        BackendConfig::new(Level::Info).with_level("demo", Level::Debug),
        appenders,
    );
    registry.set_manager(Arc::new(verbose))?;

    debug!(logger, "visible after reload: {} {}", "same", "handle")?;
    info!(logger, "debug enabled: {}", logger.is_debug_enabled())?;
    Ok(())
}
