//! Reference delegate logger writing to appenders

use super::{
    appender::{shared_appenders, Appender, SharedAppenders},
    entry::LogEntry,
};
use crate::core::{render_cause, Cause, DelegateLogger, Level, Result};
use parking_lot::RwLock;
use std::fmt;

/// A delegate with a runtime-adjustable minimum level.
pub struct BackendLogger {
    name: String,
    min_level: RwLock<Level>,
    appenders: SharedAppenders,
}

impl BackendLogger {
    #[must_use]
    pub fn new(name: impl Into<String>, min_level: Level) -> Self {
        Self::with_shared_appenders(name, min_level, shared_appenders())
    }

    #[must_use]
    pub fn with_shared_appenders(
        name: impl Into<String>,
        min_level: Level,
        appenders: SharedAppenders,
    ) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(min_level),
            appenders,
        }
    }

    #[must_use]
    pub fn with_appender(self, appender: Box<dyn Appender>) -> Self {
        self.add_appender(appender);
        self
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        *self.min_level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.min_level.write() = level;
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    fn enabled(&self, level: Level) -> bool {
        level >= *self.min_level.read()
    }

    /// Write to every appender; the first failure is returned after all were tried.
    fn write(&self, level: Level, message: &str, cause: Option<Cause<'_>>) -> Result<()> {
        let entry =
            LogEntry::new(level, self.name.as_str(), message).with_cause(cause.map(render_cause));

        let mut appenders = self.appenders.write();
        let mut first_failure = None;
        for appender in appenders.iter_mut() {
            if let Err(err) = appender.append(&entry) {
                first_failure.get_or_insert(err);
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl DelegateLogger for BackendLogger {
    fn is_debug_enabled(&self) -> bool {
        self.enabled(Level::Debug)
    }

    fn is_info_enabled(&self) -> bool {
        self.enabled(Level::Info)
    }

    fn is_warn_enabled(&self) -> bool {
        self.enabled(Level::Warn)
    }

    fn is_error_enabled(&self) -> bool {
        self.enabled(Level::Error)
    }

    fn debug(&self, message: &str, cause: Option<Cause<'_>>) -> Result<()> {
        self.write(Level::Debug, message, cause)
    }

    fn info(&self, message: &str, cause: Option<Cause<'_>>) -> Result<()> {
        self.write(Level::Info, message, cause)
    }

    fn warn(&self, message: &str, cause: Option<Cause<'_>>) -> Result<()> {
        self.write(Level::Warn, message, cause)
    }

    fn error(&self, message: &str, cause: Option<Cause<'_>>) -> Result<()> {
        self.write(Level::Error, message, cause)
    }
}

impl fmt::Debug for BackendLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendLogger")
            .field("name", &self.name)
            .field("min_level", &self.level())
            .field("appenders", &self.appenders.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::LoggerError;

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::writer("disk full"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_level_threshold() {
        let logger = BackendLogger::new("svc", Level::Warn);
        assert!(!logger.is_debug_enabled());
        assert!(!logger.is_info_enabled());
        assert!(logger.is_warn_enabled());
        assert!(logger.is_error_enabled());

        logger.set_level(Level::Debug);
        assert!(logger.is_debug_enabled());
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_emit_writes_entry_with_cause() {
        let sink = MemoryAppender::new();
        let logger =
            BackendLogger::new("svc.orders", Level::Debug).with_appender(Box::new(sink.clone()));
        let err = std::io::Error::other("connection reset");

        logger.error("payment failed", Some(&err)).unwrap();

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Error);
        assert_eq!(entries[0].logger, "svc.orders");
        assert_eq!(entries[0].cause.as_deref(), Some("connection reset"));
    }

    #[test]
    fn test_appender_failure_propagates_after_all_tried() {
        let sink = MemoryAppender::new();
        let logger = BackendLogger::new("svc", Level::Info)
            .with_appender(Box::new(FailingAppender))
            .with_appender(Box::new(sink.clone()));

        let err = logger.info("hello", None).unwrap_err();
        assert!(matches!(err, LoggerError::WriterError(_)));
        assert_eq!(sink.messages(), vec!["hello"]);
    }
}
