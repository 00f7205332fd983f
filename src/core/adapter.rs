//! Facade adapter: forwards facade calls to a swappable delegate logger

use super::{
    delegate::DelegateLogger,
    error::Result,
    facade::{FacadeLogger, Payload},
    format::{MessageFormatter, PlaceholderFormatter},
    level::Level,
    manager::LoggerManager,
    marker::Marker,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A named [`FacadeLogger`] backed by a [`DelegateLogger`].
///
/// Every call reads the delegate's enabled flag for the target level at call
/// time. When the level is off nothing else happens: no formatting, no emit.
/// When it is on, format-style calls are rendered by the formatter and the
/// result is emitted without a cause; literal calls are emitted as given.
///
/// Markers are accepted on every call and ignored.
///
/// # Example
///
/// ```
/// use rust_logger_bridge::prelude::*;
/// use std::sync::Arc;
///
/// let sink = MemoryAppender::new();
/// let delegate = BackendLogger::new("svc.orders", Level::Debug)
///     .with_appender(Box::new(sink.clone()));
/// let logger = FacadeAdapter::new("svc.orders", Arc::new(delegate));
///
/// logger.debug_arg("order {} created", &42).unwrap();
/// assert_eq!(sink.messages(), vec!["order 42 created".to_string()]);
/// ```
pub struct FacadeAdapter {
    name: String,
    delegate: RwLock<Arc<dyn DelegateLogger>>,
    formatter: Arc<dyn MessageFormatter>,
}

impl FacadeAdapter {
    #[must_use]
    pub fn new(name: impl Into<String>, delegate: Arc<dyn DelegateLogger>) -> Self {
        Self::with_formatter(name, delegate, Arc::new(PlaceholderFormatter))
    }

    #[must_use]
    pub fn with_formatter(
        name: impl Into<String>,
        delegate: Arc<dyn DelegateLogger>,
        formatter: Arc<dyn MessageFormatter>,
    ) -> Self {
        Self {
            name: name.into(),
            delegate: RwLock::new(delegate),
            formatter,
        }
    }

    /// Snapshot of the current delegate.
    ///
    /// The read lock is held only for the `Arc` clone; callers use the
    /// snapshot without holding it, so a concurrent rebind never blocks on a
    /// slow emit.
    #[inline]
    pub fn delegate(&self) -> Arc<dyn DelegateLogger> {
        Arc::clone(&self.delegate.read())
    }

    /// Replace the delegate with the one `manager` supplies for `name`.
    ///
    /// On lookup failure the current delegate is kept and the error returned.
    pub(crate) fn rebind(&self, manager: &dyn LoggerManager, name: &str) -> Result<()> {
        let delegate = manager.get_logger(name)?;
        *self.delegate.write() = delegate;
        Ok(())
    }
}

impl FacadeLogger for FacadeAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn is_enabled(&self, level: Level) -> bool {
        self.delegate().is_enabled(level)
    }

    fn log_at(&self, level: Level, _marker: Option<&Marker>, payload: Payload<'_>) -> Result<()> {
        // one snapshot for both the check and the emit
        let delegate = self.delegate();
        if !delegate.is_enabled(level) {
            return Ok(());
        }

        match payload {
            Payload::Message { message, cause } => delegate.emit(level, message, cause),
            Payload::Format { pattern, args } => {
                let message = self.formatter.format(pattern, &args)?;
                delegate.emit(level, &message, None)
            }
        }
    }
}

impl fmt::Debug for FacadeAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacadeAdapter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
