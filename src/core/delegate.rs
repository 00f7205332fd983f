//! Delegate logger contract: the logger that actually produces output

use super::{error::Result, level::Level};
use std::error::Error;

/// Error value attached to a log call, rendered by the delegate however it likes.
pub type Cause<'a> = &'a (dyn Error + 'static);

/// The backing logger a facade adapter forwards to.
///
/// Enabled checks are called on every facade call and should be cheap.
/// Emit methods may do arbitrary I/O; their errors reach the facade caller
/// unchanged.
pub trait DelegateLogger: Send + Sync {
    fn is_debug_enabled(&self) -> bool;
    fn is_info_enabled(&self) -> bool;
    fn is_warn_enabled(&self) -> bool;
    fn is_error_enabled(&self) -> bool;

    fn debug(&self, message: &str, cause: Option<Cause<'_>>) -> Result<()>;
    fn info(&self, message: &str, cause: Option<Cause<'_>>) -> Result<()>;
    fn warn(&self, message: &str, cause: Option<Cause<'_>>) -> Result<()>;
    fn error(&self, message: &str, cause: Option<Cause<'_>>) -> Result<()>;

    #[inline]
    fn is_enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => self.is_debug_enabled(),
            Level::Info => self.is_info_enabled(),
            Level::Warn => self.is_warn_enabled(),
            Level::Error => self.is_error_enabled(),
        }
    }

    #[inline]
    fn emit(&self, level: Level, message: &str, cause: Option<Cause<'_>>) -> Result<()> {
        match level {
            Level::Debug => self.debug(message, cause),
            Level::Info => self.info(message, cause),
            Level::Warn => self.warn(message, cause),
            Level::Error => self.error(message, cause),
        }
    }
}

/// Render an error and its `source()` chain on one line.
pub fn render_cause(cause: Cause<'_>) -> String {
    let mut rendered = cause.to_string();
    let mut source = cause.source();
    while let Some(inner) = source {
        rendered.push_str(": caused by: ");
        rendered.push_str(&inner.to_string());
        source = inner.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;

    #[test]
    fn test_render_cause_follows_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "orders.db missing");
        let err = LoggerError::io_operation("opening store", "cannot open", io);
        assert_eq!(
            render_cause(&err),
            "IO error while opening store: cannot open: caused by: orders.db missing"
        );
    }
}
