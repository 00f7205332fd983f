//! Registry of facade adapters keyed by logger name
//!
//! The registry is the factory callers go through to get a logger, and the
//! owner that rebinds every adapter when the manager is replaced.

use super::{
    adapter::FacadeAdapter,
    error::Result,
    format::{MessageFormatter, PlaceholderFormatter},
    manager::LoggerManager,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub struct AdapterRegistry {
    manager: RwLock<Arc<dyn LoggerManager>>,
    formatter: Arc<dyn MessageFormatter>,
    adapters: RwLock<HashMap<String, Arc<FacadeAdapter>>>,
}

impl AdapterRegistry {
    #[must_use]
    pub fn new(manager: Arc<dyn LoggerManager>) -> Self {
        Self::with_formatter(manager, Arc::new(PlaceholderFormatter))
    }

    /// Create a registry whose adapters all render through `formatter`.
    #[must_use]
    pub fn with_formatter(
        manager: Arc<dyn LoggerManager>,
        formatter: Arc<dyn MessageFormatter>,
    ) -> Self {
        Self {
            manager: RwLock::new(manager),
            formatter,
            adapters: RwLock::new(HashMap::new()),
        }
    }

    /// Return the adapter for `name`, creating it on first use.
    pub fn get_logger(&self, name: &str) -> Result<Arc<FacadeAdapter>> {
        if let Some(adapter) = self.adapters.read().get(name) {
            return Ok(Arc::clone(adapter));
        }

        // Hold the write lock across the lookup so a concurrent set_manager
        // cannot slip between lookup and insert and leave a stale binding.
        let mut adapters = self.adapters.write();
        if let Some(adapter) = adapters.get(name) {
            return Ok(Arc::clone(adapter));
        }

        let delegate = self.manager.read().get_logger(name)?;
        let adapter = Arc::new(FacadeAdapter::with_formatter(
            name,
            delegate,
            Arc::clone(&self.formatter),
        ));
        adapters.insert(name.to_string(), Arc::clone(&adapter));
        Ok(adapter)
    }

    /// Switch to a new manager and rebind every adapter handed out so far.
    ///
    /// Rebinding continues past failures; the first failure is returned and
    /// the adapters it affected keep their previous delegate.
    pub fn set_manager(&self, manager: Arc<dyn LoggerManager>) -> Result<()> {
        let adapters = self.adapters.write();
        *self.manager.write() = Arc::clone(&manager);

        let mut first_failure = None;
        for (name, adapter) in adapters.iter() {
            if let Err(err) = adapter.rebind(manager.as_ref(), name) {
                eprintln!(
                    "[LOGGER WARNING] Failed to rebind logger '{}': {}. Keeping previous delegate.",
                    name, err
                );
                first_failure.get_or_insert(err);
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.adapters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.read().is_empty()
    }

    /// Names of all adapters created so far, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.adapters.read().keys().cloned().collect();
        names.sort();
        names
    }
}
