//! Logger configuration
//!
//! One structure covers every way a logger can be set up: with a file, with
//! a console stream, with both, or with neither. Fields left at their
//! defaults fall back to the documented values below.

use super::timestamp::TimestampPattern;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Standard stream used as the console sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
    /// No console sink
    Disabled,
}

/// Logger configuration
///
/// | field | default |
/// |---|---|
/// | `log_path` | none, no file sink |
/// | `filename_pattern` | `%Y_%m_%d-%H_%M_%S` |
/// | `message_pattern` | `%H:%M:%S%.3f` |
/// | `console` | stdout without a path, disabled with one |
///
/// # Examples
///
/// ```
/// use line_logger::{ConsoleTarget, LoggerConfig};
///
/// let config = LoggerConfig::file("logs");
/// assert_eq!(config.console_target(), ConsoleTarget::Disabled);
///
/// let config = LoggerConfig::file("logs").with_console(ConsoleTarget::Stderr);
/// assert_eq!(config.console_target(), ConsoleTarget::Stderr);
///
/// assert_eq!(LoggerConfig::default().console_target(), ConsoleTarget::Stdout);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Exact log file (ending in `.txt` or `.log`) or a directory for
    /// automatically named files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Pattern for the timestamp in automatic file names
    pub filename_pattern: TimestampPattern,

    /// Pattern for the timestamp at the start of each line
    pub message_pattern: TimestampPattern,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub console: Option<ConsoleTarget>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log_path: None,
            filename_pattern: TimestampPattern::filename_default(),
            message_pattern: TimestampPattern::message_default(),
            console: None,
        }
    }

    /// File-only configuration
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new().with_log_path(path)
    }

    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_filename_pattern(mut self, pattern: TimestampPattern) -> Self {
        self.filename_pattern = pattern;
        self
    }

    #[must_use]
    pub fn with_message_pattern(mut self, pattern: TimestampPattern) -> Self {
        self.message_pattern = pattern;
        self
    }

    #[must_use]
    pub fn with_console(mut self, target: ConsoleTarget) -> Self {
        self.console = Some(target);
        self
    }

    /// Console target after applying the default for this shape
    #[must_use]
    pub fn console_target(&self) -> ConsoleTarget {
        match (self.console, &self.log_path) {
            (Some(target), _) => target,
            (None, Some(_)) => ConsoleTarget::Disabled,
            (None, None) => ConsoleTarget::Stdout,
        }
    }
}
