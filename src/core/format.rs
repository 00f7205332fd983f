//! Message formatting collaborator
//!
//! The adapter never renders `{}` patterns itself; it hands the pattern and its
//! arguments to a [`MessageFormatter`] and forwards whatever comes back. The
//! default [`PlaceholderFormatter`] fills `{}` slots positionally.

use super::error::{LoggerError, Result};
use std::fmt::{self, Display, Write};

/// Arguments of a format-style log call, keeping the call shape they came from.
#[derive(Clone, Copy)]
pub enum FormatArgs<'a> {
    One(&'a dyn Display),
    Two(&'a dyn Display, &'a dyn Display),
    Many(&'a [&'a dyn Display]),
}

impl<'a> FormatArgs<'a> {
    pub fn len(&self) -> usize {
        match self {
            FormatArgs::One(_) => 1,
            FormatArgs::Two(_, _) => 2,
            FormatArgs::Many(args) => args.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&'a dyn Display> {
        match (self, index) {
            (FormatArgs::One(a), 0) => Some(*a),
            (FormatArgs::Two(a, _), 0) => Some(*a),
            (FormatArgs::Two(_, b), 1) => Some(*b),
            (FormatArgs::Many(args), i) => args.get(i).copied(),
            _ => None,
        }
    }

    /// Render every argument with `Display`, in order.
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.len())
            .filter_map(|i| self.get(i))
            .map(|a| a.to_string())
            .collect()
    }
}

impl fmt::Debug for FormatArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatArgs::One(_) => "One",
            FormatArgs::Two(_, _) => "Two",
            FormatArgs::Many(_) => "Many",
        };
        f.debug_tuple(name).field(&self.to_strings()).finish()
    }
}

/// Renders a format pattern plus arguments into a single message.
pub trait MessageFormatter: Send + Sync {
    fn format(&self, pattern: &str, args: &FormatArgs<'_>) -> Result<String>;
}

/// `{}`-slot formatter.
///
/// - each `{}` takes the next argument
/// - `\{}` is a literal `{}` and consumes nothing
/// - `\\{}` is a literal backslash followed by the next argument
/// - surplus arguments are ignored, missing ones leave `{}` in place
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFormatter;

const DELIM: &str = "{}";
const ESCAPE: u8 = b'\\';

impl PlaceholderFormatter {
    pub fn new() -> Self {
        Self
    }

    fn is_escaped(pattern: &[u8], delim_start: usize) -> bool {
        delim_start >= 1 && pattern[delim_start - 1] == ESCAPE
    }

    fn is_double_escaped(pattern: &[u8], delim_start: usize) -> bool {
        delim_start >= 2 && pattern[delim_start - 2] == ESCAPE
    }

    fn push_arg(out: &mut String, pattern: &str, arg: &dyn Display) -> Result<()> {
        write!(out, "{}", arg)
            .map_err(|_| LoggerError::formatter(pattern, "argument Display implementation failed"))
    }
}

impl MessageFormatter for PlaceholderFormatter {
    fn format(&self, pattern: &str, args: &FormatArgs<'_>) -> Result<String> {
        let bytes = pattern.as_bytes();
        let mut out = String::with_capacity(pattern.len() + 16 * args.len());
        let mut pos = 0;
        let mut next_arg = 0;

        while next_arg < args.len() {
            let Some(found) = pattern[pos..].find(DELIM) else {
                break;
            };
            let start = pos + found;

            if Self::is_escaped(bytes, start) {
                if Self::is_double_escaped(bytes, start) {
                    // keep one backslash, the slot is live
                    out.push_str(&pattern[pos..start - 1]);
                    if let Some(arg) = args.get(next_arg) {
                        Self::push_arg(&mut out, pattern, arg)?;
                    }
                    next_arg += 1;
                    pos = start + DELIM.len();
                } else {
                    out.push_str(&pattern[pos..start - 1]);
                    out.push('{');
                    pos = start + 1;
                }
            } else {
                out.push_str(&pattern[pos..start]);
                if let Some(arg) = args.get(next_arg) {
                    Self::push_arg(&mut out, pattern, arg)?;
                }
                next_arg += 1;
                pos = start + DELIM.len();
            }
        }

        out.push_str(&pattern[pos..]);
        Ok(out)
    }
}
