//! Appender trait for log output destinations

use super::entry::LogEntry;
use crate::core::Result;
use parking_lot::RwLock;
use std::sync::Arc;

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Appender list shared by every logger a manager hands out.
pub type SharedAppenders = Arc<RwLock<Vec<Box<dyn Appender>>>>;

pub fn shared_appenders() -> SharedAppenders {
    Arc::new(RwLock::new(Vec::new()))
}
