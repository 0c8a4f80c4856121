//! Validated checker configuration.
//!
//! All invariants are enforced at construction time: the limit must be
//! positive and every ignore pattern must compile. Validation is eager, so
//! a configuration error can never interrupt a scan already in progress.

use tracing::debug;

/// Maximum line length used when no limit is configured.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

// ────────────────────────────────────────────
// Validated pattern newtype
// ────────────────────────────────────────────

/// A validated regular expression that exempts matching lines.
///
/// The regex is compiled once at construction and reused for all match calls.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    raw: String,
    compiled: regex::Regex,
}

impl IgnorePattern {
    /// Creates a new ignore pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is empty or has invalid regex syntax.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        if pattern.is_empty() {
            return Err(ConfigError::InvalidPattern {
                pattern: String::new(),
                reason: "pattern must not be empty".to_string(),
            });
        }
        let compiled = regex::Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            raw: pattern.to_string(),
            compiled,
        })
    }

    /// Tests whether a line contains a match for this pattern.
    ///
    /// The search is unanchored: a match anywhere in the line counts.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.compiled.is_match(line)
    }

    /// Returns the pattern as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

// ────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────

/// Validated configuration for the line-length check.
///
/// Immutable once constructed. Build via [`Config::builder`], or convert
/// host-declared options with [`crate::Options::into_config`].
#[derive(Debug, Clone)]
pub struct Config {
    max_line_length: usize,
    ignore_patterns: Vec<IgnorePattern>,
}

impl Config {
    /// Creates a new builder for assembling a configuration.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns the maximum allowed line length in bytes.
    #[must_use]
    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Returns the ignore patterns in configuration order.
    #[must_use]
    pub fn ignore_patterns(&self) -> &[IgnorePattern] {
        &self.ignore_patterns
    }

    /// Tests whether a line is exempted by any ignore pattern.
    ///
    /// Patterns are tried in configuration order; the first match wins.
    #[must_use]
    pub fn suppresses(&self, line: &str) -> bool {
        self.ignore_patterns.iter().any(|p| p.matches(line))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            ignore_patterns: Vec::new(),
        }
    }
}

/// Builder for configuring a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_line_length: Option<usize>,
    ignore_patterns: Vec<String>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum allowed line length in bytes (default: 80).
    #[must_use]
    pub fn max_line_length(mut self, limit: usize) -> Self {
        self.max_line_length = Some(limit);
        self
    }

    /// Adds an ignore pattern. Lines containing a match are never flagged.
    #[must_use]
    pub fn ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_patterns.push(pattern.into());
        self
    }

    /// Adds multiple ignore patterns.
    #[must_use]
    pub fn ignore_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Builds the configuration, compiling all ignore patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if the limit is zero,
    /// or [`ConfigError::InvalidPattern`] for the first pattern that fails
    /// to compile.
    pub fn build(self) -> Result<Config, ConfigError> {
        let max_line_length = self.max_line_length.unwrap_or(DEFAULT_MAX_LINE_LENGTH);
        if max_line_length == 0 {
            return Err(ConfigError::InvalidConfiguration { value: 0 });
        }

        let ignore_patterns = self
            .ignore_patterns
            .iter()
            .map(|p| IgnorePattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Built config: limit={}, {} ignore pattern(s)",
            max_line_length,
            ignore_patterns.len()
        );

        Ok(Config {
            max_line_length,
            ignore_patterns,
        })
    }
}

// ────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────

/// Errors in configuration construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The configured line length limit is not a positive integer.
    #[error("invalid max line length {value}: must be a positive integer")]
    InvalidConfiguration {
        /// The rejected value.
        value: i64,
    },

    /// An ignore pattern is empty or has invalid regex syntax.
    #[error("invalid ignore pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The invalid pattern.
        pattern: String,
        /// Why it's invalid.
        reason: String,
    },

    /// The options text could not be parsed.
    #[error("failed to parse options: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

// ────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────
