//! Core facade types and collaborator traits

pub mod adapter;
pub mod delegate;
pub mod error;
pub mod facade;
pub mod format;
pub mod level;
pub mod manager;
pub mod marker;
pub mod registry;

pub use adapter::FacadeAdapter;
pub use delegate::{render_cause, Cause, DelegateLogger};
pub use error::{LoggerError, Result};
pub use facade::{FacadeLogger, Payload};
pub use format::{FormatArgs, MessageFormatter, PlaceholderFormatter};
pub use level::Level;
pub use manager::LoggerManager;
pub use marker::Marker;
pub use registry::AdapterRegistry;
