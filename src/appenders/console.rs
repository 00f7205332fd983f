//! Console appender implementation

use crate::backend::{Appender, LogEntry, OutputFormat};
use crate::core::{Level, Result};
use colored::Colorize;

pub struct ConsoleAppender {
    use_colors: bool,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            output_format: OutputFormat::default(),
        }
    }

    /// Set the output format for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_bridge::appenders::ConsoleAppender;
    /// use rust_logger_bridge::OutputFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Format as text with optional colors
    fn format_text(&self, entry: &LogEntry) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", entry.level.to_str())
                .color(entry.level.color_code())
                .to_string()
        } else {
            format!("{:5}", entry.level.to_str())
        };

        let mut output = format!(
            "[{}] [{}] {} {} - {}",
            entry.timestamp_str(),
            level_str,
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

/// Warn and Error go to stderr, everything else to stdout.
fn is_stderr(level: Level) -> bool {
    matches!(level, Level::Warn | Level::Error)
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = match self.output_format {
            OutputFormat::Text => self.format_text(entry),
            OutputFormat::Json => self.output_format.format(entry)?,
        };

        if is_stderr(entry.level) {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_has_logger_and_cause() {
        let appender = ConsoleAppender::with_colors(false);
        let entry = LogEntry::new(Level::Error, "svc.orders", "payment failed")
            .with_cause(Some("timeout".to_string()));

        let text = appender.format_text(&entry);
        assert!(text.contains("[ERROR]"));
        assert!(text.ends_with("svc.orders - payment failed | cause: timeout"));
    }

    #[test]
    fn test_stream_routing_by_level() {
        assert!(!is_stderr(Level::Debug));
        assert!(!is_stderr(Level::Info));
        assert!(is_stderr(Level::Warn));
        assert!(is_stderr(Level::Error));
    }

    #[test]
    fn test_append_and_flush() {
        let mut appender = ConsoleAppender::with_colors(false).with_output_format(OutputFormat::Json);
        let entry = LogEntry::new(Level::Info, "svc", "console check");
        assert!(appender.append(&entry).is_ok());
        assert!(appender.flush().is_ok());
    }
}
