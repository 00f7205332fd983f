//! Basic usage: get a logger from the registry and log at each level

use rust_logger_bridge::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let manager = BackendManager::new(BackendConfig::new(Level::Debug))
        .with_appender(Box::new(ConsoleAppender::new()));
    let registry = AdapterRegistry::new(Arc::new(manager));

    let logger = registry.get_logger("demo.basic")?;

    logger.debug("Debug message")?;
    logger.info_arg("Server listening on port {}", &8080)?;
    logger.warn_arg2("Retry attempt {} of {}", &3, &5)?;

    let cause = std::io::Error::other("connection refused");
    logger.error_with_cause("Failed to reach database", &cause)?;

    let audit = Marker::new("AUDIT");
    logger.info_marked_arg(&audit, "User {} logged in", &"alice")?;

    Ok(())
}
