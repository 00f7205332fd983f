//! Logging macros for the facade surface.
//!
//! The macros pick the call shape from the number of arguments, so the
//! pattern is only rendered when the level is enabled, and they work on any
//! [`FacadeLogger`](crate::FacadeLogger): an adapter, a reference to one, or
//! the `Arc` the registry hands out. Each expands to a `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use rust_logger_bridge::prelude::*;
//! use rust_logger_bridge::info;
//!
//! let registry = AdapterRegistry::new(std::sync::Arc::new(
//!     BackendManager::new(BackendConfig::new(Level::Info)),
//! ));
//! let logger = registry.get_logger("svc.http").unwrap();
//!
//! // Literal message
//! info!(logger, "Server started").unwrap();
//!
//! // With `{}` placeholders
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! info!(logger, "User {} performed {} from {}", 42, "login", "10.0.0.1").unwrap();
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_bridge::prelude::*;
/// # let logger = FacadeAdapter::new("svc", std::sync::Arc::new(BackendLogger::new("svc", Level::Info)));
/// use rust_logger_bridge::log;
/// log!(logger, Level::Info, "Simple message").unwrap();
/// log!(logger, Level::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(,)?) => {
        $crate::FacadeLogger::log_at(
            &$logger,
            $level,
            ::core::option::Option::None,
            $crate::Payload::Message {
                message: ::core::convert::AsRef::<str>::as_ref(&$msg),
                cause: ::core::option::Option::None,
            },
        )
    };
    ($logger:expr, $level:expr, $fmt:expr, $arg:expr $(,)?) => {
        $crate::FacadeLogger::log_at(
            &$logger,
            $level,
            ::core::option::Option::None,
            $crate::Payload::Format {
                pattern: ::core::convert::AsRef::<str>::as_ref(&$fmt),
                args: $crate::FormatArgs::One(&$arg),
            },
        )
    };
    ($logger:expr, $level:expr, $fmt:expr, $arg1:expr, $arg2:expr $(,)?) => {
        $crate::FacadeLogger::log_at(
            &$logger,
            $level,
            ::core::option::Option::None,
            $crate::Payload::Format {
                pattern: ::core::convert::AsRef::<str>::as_ref(&$fmt),
                args: $crate::FormatArgs::Two(&$arg1, &$arg2),
            },
        )
    };
    ($logger:expr, $level:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $crate::FacadeLogger::log_at(
            &$logger,
            $level,
            ::core::option::Option::None,
            $crate::Payload::Format {
                pattern: ::core::convert::AsRef::<str>::as_ref(&$fmt),
                args: $crate::FormatArgs::Many(&[$(&$arg as &dyn ::core::fmt::Display),+]),
            },
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_bridge::prelude::*;
/// # let logger = FacadeAdapter::new("svc", std::sync::Arc::new(BackendLogger::new("svc", Level::Debug)));
/// use rust_logger_bridge::debug;
/// debug!(logger, "Debug information").unwrap();
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_bridge::prelude::*;
/// # let logger = FacadeAdapter::new("svc", std::sync::Arc::new(BackendLogger::new("svc", Level::Info)));
/// use rust_logger_bridge::warn;
/// warn!(logger, "Low disk space").unwrap();
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::MemoryAppender;
    use crate::backend::BackendLogger;
    use crate::core::{FacadeAdapter, Level};
    use std::sync::Arc;

    fn logger_at(level: Level) -> (FacadeAdapter, MemoryAppender) {
        let sink = MemoryAppender::new();
        let delegate = BackendLogger::new("macros", level).with_appender(Box::new(sink.clone()));
        (FacadeAdapter::new("macros", Arc::new(delegate)), sink)
    }

    #[test]
    fn test_log_macro_shapes() {
        let (logger, sink) = logger_at(Level::Debug);
        log!(logger, Level::Info, "Test message").unwrap();
        log!(logger, Level::Info, "Formatted: {}", 42).unwrap();
        log!(logger, Level::Info, "{} + {}", 1, 2).unwrap();
        log!(logger, Level::Info, "{}{}{}{}", 'a', "b", 3, 4.5).unwrap();
        log!(logger, Level::Info, String::from("owned {}"), 7).unwrap();

        assert_eq!(
            sink.messages(),
            vec!["Test message", "Formatted: 42", "1 + 2", "ab34.5", "owned 7"]
        );
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = logger_at(Level::Debug);
        debug!(logger, "Count: {}", 5).unwrap();
        info!(logger, "Items: {}", 100).unwrap();
        warn!(logger, "Retry {} of {}", 1, 3).unwrap();
        error!(logger, "Code: {}", 500).unwrap();

        let levels: Vec<Level> = sink.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, Level::ALL.to_vec());
    }

    #[test]
    fn test_disabled_level_skips_rendering() {
        struct Panics;
        impl std::fmt::Display for Panics {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("rendered while disabled");
            }
        }

        let (logger, sink) = logger_at(Level::Error);
        debug!(logger, "never {}", Panics).unwrap();
        warn!(logger, "never {} {} {}", Panics, Panics, Panics).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_macros_accept_shared_handles() {
        let (logger, sink) = logger_at(Level::Info);
        let shared = Arc::new(logger);
        info!(shared, "via arc").unwrap();
        info!(&*shared, "via ref {}", 1).unwrap();
        assert_eq!(sink.messages(), vec!["via arc", "via ref 1"]);
    }
}
