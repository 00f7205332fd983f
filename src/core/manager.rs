//! Logger manager contract: hands out delegates by logger name

use super::{delegate::DelegateLogger, error::Result};
use std::sync::Arc;

pub trait LoggerManager: Send + Sync {
    /// Look up the delegate that should back the logger called `name`.
    fn get_logger(&self, name: &str) -> Result<Arc<dyn DelegateLogger>>;
}
