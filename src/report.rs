//! Host-facing report assembly for violations.

use miette::{Diagnostic, SourceSpan};
use serde::Serialize;

use crate::checker::{check, CODE};
use crate::config::Config;
use crate::types::{Severity, Violation};

/// A violation paired with everything a host renders: severity, code,
/// message, and the offending line itself.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// Severity reported to the host.
    pub severity: Severity,
    /// Stable checker code.
    pub code: &'static str,
    /// Line number (1-indexed).
    pub line_number: usize,
    /// Human-readable message.
    pub message: String,
    /// Content of the offending line.
    pub line: &'a str,
}

impl<'a> Report<'a> {
    /// Assembles a report for a violation found in `content`.
    ///
    /// The line is sliced out of `content` with the same `'\n'` split the
    /// checker uses, so numbering always agrees with [`check`].
    #[must_use]
    pub fn new(content: &'a str, violation: &Violation) -> Self {
        let line = content
            .split('\n')
            .nth(violation.line_number.saturating_sub(1))
            .unwrap_or("");
        Self {
            severity: Severity::Warning,
            code: CODE,
            line_number: violation.line_number,
            message: violation.message(),
            line,
        }
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.line_number, self.severity, self.code, self.message
        )
    }
}

/// Chains [`check`] and [`Report::new`]: every violation in `content`,
/// ready for host rendering.
pub fn reports<'a>(content: &'a str, config: &'a Config) -> impl Iterator<Item = Report<'a>> {
    check(content, config).map(move |v| Report::new(content, &v))
}

/// Converts a violation to a miette Diagnostic for rich error display.
///
/// The label spans the offending line. Attach the file content with
/// `miette::Report::with_source_code` to render it.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(REGEXLINELENGTH), severity(Warning))]
pub struct ViolationDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl ViolationDiagnostic {
    /// Builds a diagnostic labelling the offending line within `content`.
    #[must_use]
    pub fn new(content: &str, violation: &Violation) -> Self {
        let (offset, length) = line_span(content, violation.line_number);
        Self {
            message: violation.message(),
            span: SourceSpan::from((offset, length)),
            label_message: "Line Too Long".to_string(),
        }
    }
}

/// Byte offset and length of a 1-indexed line within `content`.
fn line_span(content: &str, line_number: usize) -> (usize, usize) {
    let mut offset = 0;
    for (i, line) in content.split('\n').enumerate() {
        if i + 1 == line_number {
            return (offset, line.len());
        }
        offset += line.len() + 1; // +1 for newline
    }
    (offset, 0)
}
