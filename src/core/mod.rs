//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod origin;
pub mod sink;
pub mod timestamp;

pub use config::{ConsoleTarget, LoggerConfig};
pub use error::{LoggerError, Result, WriteErrorCallback};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, ScopedLogger};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::{TimestampPattern, DEFAULT_FILENAME_PATTERN, DEFAULT_MESSAGE_PATTERN};
