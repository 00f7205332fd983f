//! Level configuration for the reference backend

use crate::core::{Level, LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root level plus per-name overrides.
///
/// Override keys are dotted logger-name prefixes: `"svc"` applies to `"svc"`
/// and `"svc.orders"` but not to `"svcx"`. The longest matching key wins.
///
/// ```
/// use rust_logger_bridge::{BackendConfig, Level};
///
/// let config = BackendConfig::from_json(
///     r#"{ "root_level": "WARN", "levels": { "svc.orders": "DEBUG" } }"#,
/// ).unwrap();
/// assert_eq!(config.level_for("svc.orders.db"), Level::Debug);
/// assert_eq!(config.level_for("svc.billing"), Level::Warn);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub root_level: Level,
    pub levels: BTreeMap<String, Level>,
}

impl BackendConfig {
    pub fn new(root_level: Level) -> Self {
        Self {
            root_level,
            levels: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_level(mut self, prefix: impl Into<String>, level: Level) -> Self {
        self.levels.insert(prefix.into(), level);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(key) = self.levels.keys().find(|k| k.trim().is_empty()) {
            return Err(LoggerError::config(
                "BackendConfig",
                format!("level override key {:?} is empty", key),
            ));
        }
        Ok(())
    }

    /// Resolve the effective level for a logger name.
    pub fn level_for(&self, name: &str) -> Level {
        self.levels
            .iter()
            .filter(|(prefix, _)| Self::covers(prefix, name))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, level)| *level)
            .unwrap_or(self.root_level)
    }

    fn covers(prefix: &str, name: &str) -> bool {
        match name.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}
