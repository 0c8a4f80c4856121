//! The line-length check and the trait hosts use to run it.

use crate::config::Config;
use crate::types::{Severity, Violation};

use std::iter::Enumerate;
use std::str::Split;

/// Checker code, reported to hosts as the stable violation identifier.
pub const CODE: &str = "REGEXLINELENGTH";

/// Checker name, used in host configuration.
pub const NAME: &str = "regex-line-length";

/// Scans `content` line by line, yielding a violation for every line that
/// exceeds the configured limit and matches no ignore pattern.
///
/// Lines are produced by splitting on `'\n'`, so a trailing newline yields a
/// final empty line; it can never violate a positive limit. Carriage returns
/// are ordinary content and count toward length. Lengths are measured in
/// bytes. Empty content yields nothing, so empty files are not forced to
/// carry a trailing newline.
///
/// The returned iterator is lazy and borrows both arguments.
pub fn check<'a>(content: &'a str, config: &'a Config) -> Violations<'a> {
    Violations {
        lines: (!content.is_empty()).then(|| content.split('\n').enumerate()),
        config,
    }
}

/// Lazy iterator over line-length violations, in ascending line order.
///
/// Created by [`check`]. Cloning restarts the scan from the first line.
#[derive(Debug, Clone)]
pub struct Violations<'a> {
    lines: Option<Enumerate<Split<'a, char>>>,
    config: &'a Config,
}

impl Iterator for Violations<'_> {
    type Item = Violation;

    fn next(&mut self) -> Option<Violation> {
        let lines = self.lines.as_mut()?;
        let limit = self.config.max_line_length();
        for (idx, line) in lines {
            if line.len() <= limit {
                continue;
            }
            if self.config.suppresses(line) {
                continue;
            }
            return Some(Violation::new(idx + 1, line.len(), limit));
        }
        None
    }
}

/// A lint check a host can run over file content it has already read.
///
/// Implementors provide metadata the host uses for display and scheduling,
/// plus the check itself. The returned iterator is lazy: a host that stops
/// at the first violation does not pay for the rest of the file.
///
/// # Example
///
/// ```ignore
/// use regex_line_length::{Checker, Config, Severity, Violation};
///
/// pub struct TrailingWhitespace;
///
/// impl Checker for TrailingWhitespace {
///     fn name(&self) -> &'static str { "trailing-whitespace" }
///     fn code(&self) -> &'static str { "TRAILINGWS" }
///
///     fn check<'a>(
///         &self,
///         content: &'a str,
///         config: &'a Config,
///     ) -> Box<dyn Iterator<Item = Violation> + 'a> {
///         // ...
///     }
/// }
/// ```
pub trait Checker: Send + Sync {
    /// Returns the kebab-case name of this checker (e.g., "regex-line-length").
    fn name(&self) -> &'static str;

    /// Returns the checker code (e.g., "REGEXLINELENGTH").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this checker enforces.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the severity for violations from this checker.
    fn severity(&self) -> Severity {
        Severity::Warning
    }

    /// Returns the scheduling priority for hosts that order their checks.
    fn priority(&self) -> f32 {
        0.5
    }

    /// Checks a single file's content and returns the violations found.
    fn check<'a>(
        &self,
        content: &'a str,
        config: &'a Config,
    ) -> Box<dyn Iterator<Item = Violation> + 'a>;
}

/// Type alias for boxed Checker trait objects.
pub type CheckerBox = Box<dyn Checker>;

/// Flags lines longer than the configured limit, unless an ignore regex
/// matches the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineLengthChecker;

impl LineLengthChecker {
    /// Creates a new checker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Checker for LineLengthChecker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces line length with options for ignoring lines containing certain regexes."
    }

    fn check<'a>(
        &self,
        content: &'a str,
        config: &'a Config,
    ) -> Box<dyn Iterator<Item = Violation> + 'a> {
        Box::new(check(content, config))
    }
}

// ────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────
