//! Property-based tests for rust_logger_bridge using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use rust_logger_bridge::{
    BackendConfig, Cause, DelegateLogger, FacadeAdapter, FacadeLogger, FormatArgs, Level, LogEntry,
    Marker, MessageFormatter, Payload, PlaceholderFormatter,
};
use std::fmt::Display;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
    ]
}

/// Delegate with a fixed minimum level that records emitted messages.
struct Threshold {
    min: Level,
    seen: Mutex<Vec<(Level, String)>>,
}

impl Threshold {
    fn new(min: Level) -> Self {
        Self {
            min,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, level: Level, message: &str) -> rust_logger_bridge::Result<()> {
        self.seen.lock().push((level, message.to_string()));
        Ok(())
    }
}

impl DelegateLogger for Threshold {
    fn is_debug_enabled(&self) -> bool {
        Level::Debug >= self.min
    }
    fn is_info_enabled(&self) -> bool {
        Level::Info >= self.min
    }
    fn is_warn_enabled(&self) -> bool {
        Level::Warn >= self.min
    }
    fn is_error_enabled(&self) -> bool {
        Level::Error >= self.min
    }
    fn debug(&self, message: &str, _cause: Option<Cause<'_>>) -> rust_logger_bridge::Result<()> {
        self.push(Level::Debug, message)
    }
    fn info(&self, message: &str, _cause: Option<Cause<'_>>) -> rust_logger_bridge::Result<()> {
        self.push(Level::Info, message)
    }
    fn warn(&self, message: &str, _cause: Option<Cause<'_>>) -> rust_logger_bridge::Result<()> {
        self.push(Level::Warn, message)
    }
    fn error(&self, message: &str, _cause: Option<Cause<'_>>) -> rust_logger_bridge::Result<()> {
        self.push(Level::Error, message)
    }
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Level string conversions roundtrip, case-insensitively
    #[test]
    fn test_level_str_roundtrip(level in any_level(), lower in any::<bool>()) {
        let text = if lower { level.to_str().to_lowercase() } else { level.to_string() };
        let parsed: Level = text.parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// Ordering follows the discriminant
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Text without `{}` or backslashes passes through untouched
    #[test]
    fn test_pattern_without_slots_is_unchanged(pattern in "[a-zA-Z0-9 .,:;!?-]*", arg in any::<i64>()) {
        let rendered = PlaceholderFormatter.format(&pattern, &FormatArgs::One(&arg)).unwrap();
        prop_assert_eq!(rendered, pattern);
    }

    /// Each slot takes the next argument in order
    #[test]
    fn test_slots_filled_in_order(values in prop::collection::vec(any::<u32>(), 1..8)) {
        let pattern = vec!["{}"; values.len()].join("|");
        let args: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();

        let rendered = PlaceholderFormatter.format(&pattern, &FormatArgs::Many(&args)).unwrap();
        let expected: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        prop_assert_eq!(rendered, expected.join("|"));
    }

    /// Slots beyond the supplied arguments stay literal
    #[test]
    fn test_missing_arguments_keep_slots(extra in 1usize..5, value in any::<u16>()) {
        let pattern = format!("{{}}{}", " {}".repeat(extra));
        let rendered = PlaceholderFormatter.format(&pattern, &FormatArgs::One(&value)).unwrap();
        prop_assert_eq!(rendered, format!("{}{}", value, " {}".repeat(extra)));
    }
}

// ============================================================================
// Adapter Tests
// ============================================================================

proptest! {
    /// A call reaches the delegate exactly when its level is at or above the threshold
    #[test]
    fn test_emission_matches_threshold(min in any_level(), level in any_level(), message in "[a-z ]{0,24}") {
        let delegate = Arc::new(Threshold::new(min));
        let logger = FacadeAdapter::new("prop", Arc::clone(&delegate) as Arc<dyn DelegateLogger>);

        logger.log_at(level, None, Payload::Message { message: &message, cause: None }).unwrap();

        let seen = delegate.seen.lock();
        if level >= min {
            prop_assert_eq!(seen.as_slice(), &[(level, message.clone())]);
        } else {
            prop_assert!(seen.is_empty());
        }
    }

    /// Adding a marker never changes what is emitted
    #[test]
    fn test_marker_is_transparent(
        min in any_level(),
        level in any_level(),
        marker_name in "[A-Z]{1,8}",
        value in any::<i32>()
    ) {
        let plain = Arc::new(Threshold::new(min));
        let marked = Arc::new(Threshold::new(min));
        let plain_logger =
            FacadeAdapter::new("prop", Arc::clone(&plain) as Arc<dyn DelegateLogger>);
        let marked_logger =
            FacadeAdapter::new("prop", Arc::clone(&marked) as Arc<dyn DelegateLogger>);
        let marker = Marker::new(marker_name);
        let payload = Payload::Format { pattern: "value={}", args: FormatArgs::One(&value) };

        plain_logger.log_at(level, None, payload).unwrap();
        marked_logger.log_at(level, Some(&marker), payload).unwrap();

        prop_assert_eq!(
            plain_logger.is_enabled(level),
            marked_logger.is_enabled_for(level, &marker)
        );
        prop_assert_eq!(&*plain.seen.lock(), &*marked.seen.lock());
    }
}

// ============================================================================
// LogEntry Sanitization Tests
// ============================================================================

proptest! {
    /// No raw line breaks or tabs survive into an entry
    #[test]
    fn test_entry_sanitization(message in ".*") {
        let entry = LogEntry::new(Level::Info, "prop", &message);
        prop_assert!(!entry.message.contains('\n'));
        prop_assert!(!entry.message.contains('\r'));
        prop_assert!(!entry.message.contains('\t'));
    }

    /// Config resolution never picks an override that does not cover the name
    #[test]
    fn test_config_prefix_resolution(segments in prop::collection::vec("[a-z]{1,4}", 1..4)) {
        let name = segments.join(".");
        let config = BackendConfig::new(Level::Error).with_level(segments[0].clone(), Level::Debug);
        prop_assert_eq!(config.level_for(&name), Level::Debug);

        let sibling = format!("{}x", segments[0]);
        prop_assert_eq!(config.level_for(&sibling), Level::Error);
    }
}
