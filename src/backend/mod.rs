//! Reference backend: a delegate logger, its manager and configuration
//!
//! The facade adapter only needs the traits in [`crate::core`]; this module is
//! one concrete implementation of them, good enough for applications that do
//! not already have a logging backend to bridge to.

pub mod appender;
pub mod config;
pub mod entry;
pub mod logger;
pub mod manager;

pub use appender::{shared_appenders, Appender, SharedAppenders};
pub use config::BackendConfig;
pub use entry::{LogEntry, OutputFormat};
pub use logger::BackendLogger;
pub use manager::BackendManager;
