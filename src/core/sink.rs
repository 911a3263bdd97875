//! Sink trait for log output destinations

use super::{error::Result, log_entry::LogEntry, timestamp::TimestampPattern};

pub trait Sink: Send {
    /// Write one rendered entry, terminated the way this sink terminates lines
    fn append(&mut self, entry: &LogEntry, pattern: &TimestampPattern) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
