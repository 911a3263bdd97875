//! Timestamp patterns
//!
//! Log lines and automatically named log files both carry a timestamp
//! rendered from a strftime-compatible pattern. Patterns are checked once,
//! when they are created, by rendering a sample timestamp; a pattern that
//! chrono can parse but not render is rejected there.

use super::error::{LoggerError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Default pattern for the timestamp inside a log line: `14:03:27.512`
pub const DEFAULT_MESSAGE_PATTERN: &str = "%H:%M:%S%.3f";

/// Default pattern for automatically named log files: `2025_01_08-14_03_27`
pub const DEFAULT_FILENAME_PATTERN: &str = "%Y_%m_%d-%H_%M_%S";

/// A validated strftime pattern
///
/// # Examples
///
/// ```
/// use line_logger::TimestampPattern;
///
/// let pattern = TimestampPattern::new("%Y-%m-%d").unwrap();
/// assert_eq!(pattern.as_str(), "%Y-%m-%d");
///
/// assert!(TimestampPattern::new("%Q").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimestampPattern(String);

impl TimestampPattern {
    /// Parse a strftime pattern, rejecting anything chrono cannot render
    ///
    /// Unknown specifiers fail, and so do parse-only ones such as `%#z`.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let sample = Utc.from_utc_datetime(&NaiveDateTime::default());
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&pattern)).is_err() {
            return Err(LoggerError::invalid_pattern(pattern));
        }
        Ok(Self(pattern))
    }

    /// `HH:mm:ss.SSS`, used for log lines unless configured otherwise
    #[must_use]
    pub fn message_default() -> Self {
        Self(DEFAULT_MESSAGE_PATTERN.to_string())
    }

    /// `yyyy_MM_dd-HH_mm_ss`, used for automatic file names unless configured otherwise
    #[must_use]
    pub fn filename_default() -> Self {
        Self(DEFAULT_FILENAME_PATTERN.to_string())
    }

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    #[must_use]
    pub fn iso8601() -> Self {
        Self("%Y-%m-%dT%H:%M:%S%.3f%:z".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render a timestamp with this pattern
    ///
    /// Falls back to the raw pattern text if rendering fails, so a line is
    /// still produced.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut output = String::new();
        if write!(output, "{}", datetime.format(&self.0)).is_err() {
            output.clear();
            output.push_str(&self.0);
        }
        output
    }
}

impl fmt::Display for TimestampPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TimestampPattern {
    type Error = LoggerError;

    fn try_from(pattern: String) -> Result<Self> {
        Self::new(pattern)
    }
}

impl TryFrom<&str> for TimestampPattern {
    type Error = LoggerError;

    fn try_from(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }
}

impl From<TimestampPattern> for String {
    fn from(pattern: TimestampPattern) -> Self {
        pattern.0
    }
}
