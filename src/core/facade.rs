//! The facade logger interface
//!
//! Callers see a fixed surface: four levels, five call shapes per level and a
//! marker-qualified twin of every shape. Implementors only provide
//! [`FacadeLogger::log_at`] (plus `name` and `is_enabled`); every other method
//! is a thin wrapper that builds a [`Payload`] and funnels into it.

use super::{
    delegate::Cause,
    error::Result,
    format::FormatArgs,
    level::Level,
    marker::Marker,
};
use std::fmt::Display;

/// What a single log call carries.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// Literal message, already final, with an optional cause.
    Message {
        message: &'a str,
        cause: Option<Cause<'a>>,
    },
    /// Pattern to be rendered by the formatter; never carries a cause.
    Format {
        pattern: &'a str,
        args: FormatArgs<'a>,
    },
}

macro_rules! level_methods {
    (
        $level:expr, $label:literal;
        $is_enabled:ident, $is_enabled_for:ident,
        $plain:ident, $arg:ident, $arg2:ident, $args:ident, $with_cause:ident,
        $marked:ident, $marked_arg:ident, $marked_arg2:ident, $marked_args:ident,
        $marked_with_cause:ident $(,)?
    ) => {
        #[doc = concat!("Is the logger enabled for the ", $label, " level?")]
        #[inline]
        fn $is_enabled(&self) -> bool {
            self.is_enabled($level)
        }

        #[doc = concat!("Marker-qualified ", $label, " check.")]
        #[inline]
        fn $is_enabled_for(&self, marker: &Marker) -> bool {
            self.is_enabled_for($level, marker)
        }

        #[doc = concat!("Log a literal message at the ", $label, " level.")]
        #[inline]
        fn $plain(&self, message: &str) -> Result<()> {
            self.log_at($level, None, Payload::Message { message, cause: None })
        }

        #[doc = concat!("Log at the ", $label, " level, rendering `format` with one argument.")]
        #[inline]
        fn $arg(&self, format: &str, arg: &dyn Display) -> Result<()> {
            self.log_at(
                $level,
                None,
                Payload::Format { pattern: format, args: FormatArgs::One(arg) },
            )
        }

        #[inline]
        fn $arg2(&self, format: &str, arg1: &dyn Display, arg2: &dyn Display) -> Result<()> {
            self.log_at(
                $level,
                None,
                Payload::Format { pattern: format, args: FormatArgs::Two(arg1, arg2) },
            )
        }

        #[inline]
        fn $args(&self, format: &str, args: &[&dyn Display]) -> Result<()> {
            self.log_at(
                $level,
                None,
                Payload::Format { pattern: format, args: FormatArgs::Many(args) },
            )
        }

        #[doc = concat!("Log a message and the error that caused it at the ", $label, " level.")]
        #[inline]
        fn $with_cause(&self, message: &str, cause: Cause<'_>) -> Result<()> {
            self.log_at($level, None, Payload::Message { message, cause: Some(cause) })
        }

        #[inline]
        fn $marked(&self, marker: &Marker, message: &str) -> Result<()> {
            self.log_at($level, Some(marker), Payload::Message { message, cause: None })
        }

        #[inline]
        fn $marked_arg(&self, marker: &Marker, format: &str, arg: &dyn Display) -> Result<()> {
            self.log_at(
                $level,
                Some(marker),
                Payload::Format { pattern: format, args: FormatArgs::One(arg) },
            )
        }

        #[inline]
        fn $marked_arg2(
            &self,
            marker: &Marker,
            format: &str,
            arg1: &dyn Display,
            arg2: &dyn Display,
        ) -> Result<()> {
            self.log_at(
                $level,
                Some(marker),
                Payload::Format { pattern: format, args: FormatArgs::Two(arg1, arg2) },
            )
        }

        #[inline]
        fn $marked_args(&self, marker: &Marker, format: &str, args: &[&dyn Display]) -> Result<()> {
            self.log_at(
                $level,
                Some(marker),
                Payload::Format { pattern: format, args: FormatArgs::Many(args) },
            )
        }

        #[inline]
        fn $marked_with_cause(&self, marker: &Marker, message: &str, cause: Cause<'_>) -> Result<()> {
            self.log_at($level, Some(marker), Payload::Message { message, cause: Some(cause) })
        }
    };
}

pub trait FacadeLogger: Send + Sync {
    fn name(&self) -> &str;

    fn is_enabled(&self, level: Level) -> bool;

    /// Single dispatch path behind every level method.
    fn log_at(&self, level: Level, marker: Option<&Marker>, payload: Payload<'_>) -> Result<()>;

    /// Markers do not take part in level decisions.
    #[inline]
    fn is_enabled_for(&self, level: Level, marker: &Marker) -> bool {
        let _ = marker;
        self.is_enabled(level)
    }

    level_methods! {
        Level::Debug, "DEBUG";
        is_debug_enabled, is_debug_enabled_for,
        debug, debug_arg, debug_arg2, debug_args, debug_with_cause,
        debug_marked, debug_marked_arg, debug_marked_arg2, debug_marked_args,
        debug_marked_with_cause,
    }

    level_methods! {
        Level::Info, "INFO";
        is_info_enabled, is_info_enabled_for,
        info, info_arg, info_arg2, info_args, info_with_cause,
        info_marked, info_marked_arg, info_marked_arg2, info_marked_args,
        info_marked_with_cause,
    }

    level_methods! {
        Level::Warn, "WARN";
        is_warn_enabled, is_warn_enabled_for,
        warn, warn_arg, warn_arg2, warn_args, warn_with_cause,
        warn_marked, warn_marked_arg, warn_marked_arg2, warn_marked_args,
        warn_marked_with_cause,
    }

    level_methods! {
        Level::Error, "ERROR";
        is_error_enabled, is_error_enabled_for,
        error, error_arg, error_arg2, error_args, error_with_cause,
        error_marked, error_marked_arg, error_marked_arg2, error_marked_args,
        error_marked_with_cause,
    }
}

macro_rules! forward_facade {
    ($($ty:ty),+) => {
        $(
            impl<T: FacadeLogger + ?Sized> FacadeLogger for $ty {
                #[inline]
                fn name(&self) -> &str {
                    (**self).name()
                }

                #[inline]
                fn is_enabled(&self, level: Level) -> bool {
                    (**self).is_enabled(level)
                }

                #[inline]
                fn log_at(
                    &self,
                    level: Level,
                    marker: Option<&Marker>,
                    payload: Payload<'_>,
                ) -> Result<()> {
                    (**self).log_at(level, marker, payload)
                }

                #[inline]
                fn is_enabled_for(&self, level: Level, marker: &Marker) -> bool {
                    (**self).is_enabled_for(level, marker)
                }
            }
        )+
    };
}

forward_facade!(&T, Box<T>, std::sync::Arc<T>);
