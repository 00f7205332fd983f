//! Reference logger manager built from a [`BackendConfig`]

use super::{
    appender::{shared_appenders, Appender, SharedAppenders},
    config::BackendConfig,
    logger::BackendLogger,
};
use crate::core::{DelegateLogger, LoggerError, LoggerManager, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Hands out one [`BackendLogger`] per name, all writing to the same appenders.
///
/// A manager is immutable configuration-wise; to reconfigure, build a new
/// manager and pass it to [`crate::AdapterRegistry::set_manager`].
pub struct BackendManager {
    config: BackendConfig,
    appenders: SharedAppenders,
    loggers: Mutex<HashMap<String, Arc<BackendLogger>>>,
}

impl BackendManager {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self::with_shared_appenders(config, shared_appenders())
    }

    /// Build a manager that writes to an existing appender list, so a
    /// reconfigured manager can keep the outputs of the one it replaces.
    #[must_use]
    pub fn with_shared_appenders(config: BackendConfig, appenders: SharedAppenders) -> Self {
        Self {
            config,
            appenders,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn with_appender(self, appender: Box<dyn Appender>) -> Self {
        self.appenders.write().push(appender);
        self
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn appenders(&self) -> SharedAppenders {
        Arc::clone(&self.appenders)
    }

    /// Typed lookup, for callers that want to adjust a logger's level directly.
    pub fn logger(&self, name: &str) -> Result<Arc<BackendLogger>> {
        if name.trim().is_empty() {
            return Err(LoggerError::lookup(name, "logger name must not be empty"));
        }

        let mut loggers = self.loggers.lock();
        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(BackendLogger::with_shared_appenders(
                name,
                self.config.level_for(name),
                Arc::clone(&self.appenders),
            ))
        });
        Ok(Arc::clone(logger))
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }
}

impl LoggerManager for BackendManager {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn DelegateLogger>> {
        let logger: Arc<dyn DelegateLogger> = self.logger(name)?;
        Ok(logger)
    }
}
