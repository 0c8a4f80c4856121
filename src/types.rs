//! Core types for lint violations.

use serde::{Deserialize, Serialize};

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A line that exceeds the configured length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Line number (1-indexed).
    pub line_number: usize,
    /// Observed line length in bytes.
    pub observed_length: usize,
    /// The limit the line exceeds.
    pub limit: usize,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(line_number: usize, observed_length: usize, limit: usize) -> Self {
        Self {
            line_number,
            observed_length,
            limit,
        }
    }

    /// Returns the human-readable message for this violation.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "This line is {} characters long, but the convention is {} characters.",
            self.observed_length, self.limit
        )
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.message())
    }
}
