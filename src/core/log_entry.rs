//! Log record and line rendering

use super::log_level::LogLevel;
use super::timestamp::TimestampPattern;
use chrono::{DateTime, Local};

/// One log record. Built at emission time and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub origin: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(level: LogLevel, origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            origin: origin.into(),
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// `[<timestamp>] [<LABEL>/<origin>] <message>`, without a line terminator
    #[must_use]
    pub fn format_line(&self, pattern: &TimestampPattern) -> String {
        self.render(pattern, self.level.to_str())
    }

    pub(crate) fn render(&self, pattern: &TimestampPattern, label: &str) -> String {
        format!(
            "[{}] [{}/{}] {}",
            pattern.format(&self.timestamp),
            label,
            self.origin,
            self.message
        )
    }
}
