//! Log entry produced by the reference backend

use crate::core::{Level, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: Level,
    pub logger: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub thread_id: String,
    pub thread_name: Option<String>,
}

impl LogEntry {
    /// Escape line breaks and tabs so one call can never forge extra log lines.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: Level, logger: impl Into<String>, message: &str) -> Self {
        Self {
            level,
            logger: logger.into(),
            message: Self::sanitize(message),
            cause: None,
            timestamp: Utc::now(),
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
        }
    }

    #[must_use]
    pub fn with_cause(mut self, cause: Option<String>) -> Self {
        self.cause = cause.map(|c| Self::sanitize(&c));
        self
    }

    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// How appenders render an entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[2025-01-08T10:30:45.120Z] [INFO ] [main] svc.orders - order 42 created`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn format(&self, entry: &LogEntry) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(Self::format_text(entry)),
            OutputFormat::Json => Ok(serde_json::to_string(entry)?),
        }
    }

    fn format_text(entry: &LogEntry) -> String {
        let mut output = format!(
            "[{}] [{:5}] [{}] {} - {}",
            entry.timestamp_str(),
            entry.level.to_str(),
            entry.thread_label(),
            entry.logger,
            entry.message
        );
        if let Some(ref cause) = entry.cause {
            output.push_str(" | cause: ");
            output.push_str(cause);
        }
        output
    }
}
