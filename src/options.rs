//! Host-declared checker options (DTO layer).
//!
//! These types exist solely for serde deserialization of the options a host
//! exposes for this checker. They are converted to a validated [`Config`]
//! via [`Options::into_config`].

use serde::Deserialize;

use crate::config::{Config, ConfigError};

/// Help text for the host-declared options, keyed by option name.
pub const OPTION_HELP: &[(&str, &str)] = &[
    (
        "max-line-length",
        "Adjust the maximum line length before a warning is raised. By default, \
         a warning is raised on lines exceeding 80 characters.",
    ),
    (
        "ignore-line-regexes",
        "Provide a list of regexes that allow the linter to ignore certain lines.",
    ),
];

/// Raw representation of the checker options as a host declares them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Options {
    /// Maximum line length before a warning is raised.
    #[serde(rename = "max-line-length", default)]
    pub max_line_length: Option<i64>,

    /// Regexes that exempt matching lines from the check.
    #[serde(rename = "ignore-line-regexes", default)]
    pub ignore_line_regexes: Option<Vec<String>>,
}

impl Options {
    /// Parses options from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Converts the raw options into a validated [`Config`].
    ///
    /// Absent options fall back to their defaults: a limit of 80 and no
    /// ignore patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if `max-line-length` is
    /// not a positive integer, or [`ConfigError::InvalidPattern`] for the
    /// first regex that fails to compile.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(value) = self.max_line_length {
            let limit = usize::try_from(value)
                .map_err(|_| ConfigError::InvalidConfiguration { value })?;
            builder = builder.max_line_length(limit);
        }

        if let Some(patterns) = self.ignore_line_regexes {
            builder = builder.ignore_patterns(patterns);
        }

        builder.build()
    }
}
