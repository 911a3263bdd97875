//! Main logger implementation

use super::{
    config::{ConsoleTarget, LoggerConfig},
    error::{LoggerError, Result, WriteErrorCallback},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    origin,
    sink::Sink,
    timestamp::TimestampPattern,
};
use crate::appenders::{ConsoleSink, FileSink};
use parking_lot::Mutex;
use std::cell::Cell;
use std::io::Write;
use std::path::{Path, PathBuf};

// Set while this thread runs a write-error hook
thread_local! {
    static IN_WRITE_ERROR_HOOK: Cell<bool> = const { Cell::new(false) };
}

/// Writes timestamped, leveled lines to an optional file and an optional console
///
/// Every emission call renders
/// `[<timestamp>] [<LABEL>/<origin>] <message>` once and routes it to the
/// file first, then the console. Emission never fails: a file write error is
/// counted in [`metrics`](Logger::metrics), passed to the write-error hook if
/// one is installed, and otherwise dropped.
///
/// # Example
///
/// ```
/// use line_logger::Logger;
///
/// let logger = Logger::new();
/// logger.info("Server started");
/// logger.warn(format!("Retry attempt {} of {}", 3, 5));
/// ```
pub struct Logger {
    file: Mutex<Option<FileSink>>,
    console: Mutex<Option<ConsoleSink>>,
    message_pattern: TimestampPattern,
    file_path: Option<PathBuf>,
    metrics: LoggerMetrics,
    on_write_error: Option<WriteErrorCallback>,
}

impl Logger {
    /// Logger writing to standard output with the default message pattern
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: Mutex::new(None),
            console: Mutex::new(Some(ConsoleSink::stdout())),
            message_pattern: TimestampPattern::message_default(),
            file_path: None,
            metrics: LoggerMetrics::new(),
            on_write_error: None,
        }
    }

    /// File-only logger; `path` is an exact `.txt`/`.log` file or a directory
    pub fn to_file(path: impl Into<PathBuf>) -> Result<Self> {
        Self::from_config(LoggerConfig::file(path))
    }

    /// Build a logger from a loaded [`LoggerConfig`]
    ///
    /// Fails if the log file or its directory cannot be created.
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use line_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .log_path("logs")
    ///     .console(ConsoleTarget::Stderr)
    ///     .message_pattern(TimestampPattern::iso8601())
    ///     .build()?;
    /// # Ok::<(), LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Resolved path of the log file, if a file sink was configured
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Pattern for the timestamp at the start of each line
    pub fn message_pattern(&self) -> &TimestampPattern {
        &self.message_pattern
    }

    /// Whether a file sink is open; false after [`close`](Logger::close)
    pub fn has_file(&self) -> bool {
        self.file.lock().is_some()
    }

    pub fn has_console(&self) -> bool {
        self.console.lock().is_some()
    }

    /// Emission and write-failure counters
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log with the calling source file as the origin
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let origin = origin::caller();
        self.log_from(&origin, level, message);
    }

    /// Log with an explicit origin tag
    pub fn log_from(&self, origin: &str, level: LogLevel, message: impl Into<String>) {
        self.dispatch(&LogEntry::new(level, origin, message));
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Child logger that tags every line with `origin`
    ///
    /// ```
    /// use line_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// let db = logger.scoped("database");
    /// db.info("connected");
    /// ```
    pub fn scoped(&self, origin: impl Into<String>) -> ScopedLogger<'_> {
        ScopedLogger {
            logger: self,
            origin: origin.into(),
        }
    }

    /// Route one entry: file first, console second
    fn dispatch(&self, entry: &LogEntry) {
        let file_result = Self::append_to(&self.file, entry, &self.message_pattern);
        let console_result = Self::append_to(&self.console, entry, &self.message_pattern);

        if file_result.is_some() || console_result.is_some() {
            self.metrics.record_emitted();
        }

        // Console errors are discarded, like a print primitive's
        if let Some(Err(e)) = file_result {
            self.report_write_failure(&e);
        }
    }

    /// `None` when the slot holds no sink, so the call was a no-op
    fn append_to<S: Sink>(
        slot: &Mutex<Option<S>>,
        entry: &LogEntry,
        pattern: &TimestampPattern,
    ) -> Option<Result<()>> {
        slot.lock().as_mut().map(|sink| sink.append(entry, pattern))
    }

    /// Count the failure and run the hook, unless the hook itself is logging
    fn report_write_failure(&self, error: &LoggerError) {
        self.metrics.record_write_failure();
        let Some(ref callback) = self.on_write_error else {
            return;
        };
        if IN_WRITE_ERROR_HOOK.with(|flag| flag.replace(true)) {
            return;
        }
        let _reset = HookReset;
        callback(error);
    }

    pub fn flush(&self) -> Result<()> {
        if let Some(file) = self.file.lock().as_mut() {
            file.flush()?;
        }
        if let Some(console) = self.console.lock().as_mut() {
            console.flush()?;
        }
        Ok(())
    }

    /// Flush and release the log file
    ///
    /// Afterwards file output is a no-op; console output continues.
    /// Closing twice is harmless.
    pub fn close(&self) -> Result<()> {
        let file = self.file.lock().take();
        match file {
            Some(mut file) => file.close(),
            None => Ok(()),
        }
    }
}

/// Clears the hook flag when the hook returns or unwinds
struct HookReset;

impl Drop for HookReset {
    fn drop(&mut self) {
        IN_WRITE_ERROR_HOOK.with(|flag| flag.set(false));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to close log file during shutdown: {}", e);
        }
        if let Some(console) = self.console.get_mut().as_mut() {
            let _ = console.flush();
        }

        let failures = self.metrics.write_failures();
        if failures > 0 && self.on_write_error.is_none() {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed file writes (failure rate: {:.2}%)",
                failures,
                self.metrics.failure_rate()
            );
        }
    }
}

/// A logger bound to one origin tag
///
/// Created by [`Logger::scoped`]. Shares the parent's sinks.
pub struct ScopedLogger<'a> {
    logger: &'a Logger,
    origin: String,
}

impl ScopedLogger<'_> {
    /// The origin tag written on every line
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Log at `level` under the bound origin
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.logger.log_from(&self.origin, level, message);
    }

    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Takes everything [`LoggerConfig`] holds plus values that cannot be
/// serialized: an arbitrary console writer and the write-error hook.
///
/// # Example
/// ```
/// use line_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .console_writer(std::io::sink())
///     .on_write_error(Arc::new(|error: &LoggerError| {
///         eprintln!("ALERT: log line lost: {}", error);
///     }))
///     .build()?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console_sink: Option<ConsoleSink>,
    on_write_error: Option<WriteErrorCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            console_sink: None,
            on_write_error: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Exact log file (ending in `.txt` or `.log`) or a directory
    #[must_use = "builder methods return a new value"]
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn filename_pattern(mut self, pattern: TimestampPattern) -> Self {
        self.config.filename_pattern = pattern;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn message_pattern(mut self, pattern: TimestampPattern) -> Self {
        self.config.message_pattern = pattern;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, target: ConsoleTarget) -> Self {
        self.config.console = Some(target);
        self
    }

    /// Use a prepared console sink; overrides the console target
    #[must_use = "builder methods return a new value"]
    pub fn console_sink(mut self, sink: ConsoleSink) -> Self {
        self.console_sink = Some(sink);
        self
    }

    /// Use any writer as the console stream; overrides the console target
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.console_sink(ConsoleSink::new(writer))
    }

    /// Observe file write failures that emission otherwise swallows
    ///
    /// The hook runs on the emitting thread after the file lock is released.
    /// It may log through the same logger; failures of those nested lines are
    /// counted but do not run the hook again.
    #[must_use = "builder methods return a new value"]
    pub fn on_write_error(mut self, callback: WriteErrorCallback) -> Self {
        self.on_write_error = Some(callback);
        self
    }

    /// Open the file sink, if any, and build the Logger
    pub fn build(self) -> Result<Logger> {
        let LoggerBuilder {
            config,
            console_sink,
            on_write_error,
        } = self;

        let console = console_sink.or_else(|| match config.console_target() {
            ConsoleTarget::Stdout => Some(ConsoleSink::stdout()),
            ConsoleTarget::Stderr => Some(ConsoleSink::stderr()),
            ConsoleTarget::Disabled => None,
        });

        let file = config
            .log_path
            .as_ref()
            .map(|path| FileSink::open(path, &config.filename_pattern))
            .transpose()?;
        let file_path = file.as_ref().map(|file| file.path().to_path_buf());

        Ok(Logger {
            file: Mutex::new(file),
            console: Mutex::new(console),
            message_pattern: config.message_pattern,
            file_path,
            metrics: LoggerMetrics::new(),
            on_write_error,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
