//! # Rust Logger Bridge
//!
//! A logging facade bridge: code written against a fixed multi-level logger
//! interface ([`FacadeLogger`]) is forwarded to a swappable backing logger
//! ([`DelegateLogger`]) supplied by a [`LoggerManager`].
//!
//! ## Features
//!
//! - **Cheap when off**: the delegate's level check runs first; a disabled
//!   call never formats its pattern or touches the backend
//! - **Full facade surface**: literal, one / two / many-argument `{}` patterns
//!   and error causes, each with a marker-qualified twin, at four levels
//! - **Hot reconfiguration**: [`AdapterRegistry::set_manager`] rebinds every
//!   adapter already handed out without invalidating it
//! - **Reference backend**: level configuration, console, file and in-memory
//!   appenders for applications with nothing to bridge to
//!
//! ## Example
//!
//! ```
//! use rust_logger_bridge::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = MemoryAppender::new();
//! let manager = BackendManager::new(BackendConfig::new(Level::Info))
//!     .with_appender(Box::new(sink.clone()));
//! let registry = AdapterRegistry::new(Arc::new(manager));
//!
//! let logger = registry.get_logger("svc.orders").unwrap();
//! logger.debug_arg("order {} created", &42).unwrap();
//! logger.info_arg2("order {} moved to {}", &42, &"paid").unwrap();
//!
//! assert_eq!(sink.messages(), vec!["order 42 moved to paid".to_string()]);
//! ```

pub mod appenders;
pub mod backend;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::MemoryAppender;
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::backend::{
        Appender, BackendConfig, BackendLogger, BackendManager, LogEntry, OutputFormat,
    };
    pub use crate::core::{
        AdapterRegistry, Cause, DelegateLogger, FacadeAdapter, FacadeLogger, FormatArgs, Level,
        LoggerError, LoggerManager, Marker, MessageFormatter, Payload, PlaceholderFormatter,
        Result,
    };
}

pub use crate::appenders::MemoryAppender;
#[cfg(feature = "console")]
pub use crate::appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use crate::appenders::FileAppender;
pub use crate::backend::{
    Appender, BackendConfig, BackendLogger, BackendManager, LogEntry, OutputFormat,
};
pub use crate::core::{
    render_cause, AdapterRegistry, Cause, DelegateLogger, FacadeAdapter, FacadeLogger, FormatArgs,
    Level, LoggerError, LoggerManager, Marker, MessageFormatter, Payload, PlaceholderFormatter,
    Result,
};
