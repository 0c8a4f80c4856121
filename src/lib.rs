//! # regex-line-length
//!
//! A single lint rule for embedding in linting hosts: flags lines longer
//! than a configured limit, unless the line matches one of the configured
//! ignore regexes.
//!
//! The host reads file content, hands it to [`check`] together with a
//! validated [`Config`], and renders the resulting [`Violation`]s, or
//! ready-made [`Report`]s via [`reports`]. Hosts that manage a set of
//! checks behind trait objects use [`Checker`] and [`LineLengthChecker`].
//!
//! ## Example
//!
//! ```
//! use regex_line_length::{check, Config};
//!
//! # fn main() -> Result<(), regex_line_length::ConfigError> {
//! let config = Config::builder()
//!     .max_line_length(10)
//!     .ignore_pattern("NOLINT")
//!     .build()?;
//!
//! let content = "short\nthis line is much too long\ntoo long but NOLINT\n";
//! let violations: Vec<_> = check(content, &config).collect();
//!
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].line_number, 2);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod options;
mod report;
mod types;

pub use checker::{check, Checker, CheckerBox, LineLengthChecker, Violations, CODE, NAME};
pub use config::{Config, ConfigBuilder, ConfigError, IgnorePattern, DEFAULT_MAX_LINE_LENGTH};
pub use options::{Options, OPTION_HELP};
pub use report::{reports, Report, ViolationDiagnostic};
pub use types::{Severity, Violation};
