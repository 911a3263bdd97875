//! # Line Logger
//!
//! A small, synchronous logger that writes timestamped, leveled text lines
//! to a console stream, a file, or both.
//!
//! Every line has the form
//!
//! ```text
//! [14:03:27.512] [INFO/server] listening on port 8080
//! ```
//!
//! ## Features
//!
//! - **Two sinks**: any console writer (stdout by default) and an append-mode
//!   log file, each optional
//! - **Automatic file names**: point the logger at a directory and it creates
//!   `log_<timestamp>.txt` inside it
//! - **Flush per line**: nothing is buffered, so nothing is lost on a crash
//! - **Never fails at runtime**: file write errors are counted and can be
//!   observed through a hook, but emission never returns an error
//!
//! ## Example
//!
//! ```no_run
//! use line_logger::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let logger = Logger::builder()
//!         .log_path("logs")
//!         .console(ConsoleTarget::Stdout)
//!         .build()?;
//!
//!     logger.info("Application started");
//!     line_logger::warn!(logger, "Disk usage at {}%", 91);
//!
//!     logger.close()
//! }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleSink, FileSink};
    pub use crate::core::{
        ConsoleTarget, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result, ScopedLogger, Sink, TimestampPattern, WriteErrorCallback,
    };
}

pub use appenders::{ConsoleSink, FileSink};
pub use core::{
    ConsoleTarget, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, ScopedLogger, Sink, TimestampPattern, WriteErrorCallback,
    DEFAULT_FILENAME_PATTERN, DEFAULT_MESSAGE_PATTERN,
};
