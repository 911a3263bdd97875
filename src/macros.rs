//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and tag the line with
//! the `module_path!()` of the call site, so the origin reads as the full
//! module path (`my_app::net::client`) rather than the file name that the
//! plain methods derive.
//!
//! # Examples
//!
//! ```
//! use line_logger::prelude::*;
//! use line_logger::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at the given level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use line_logger::prelude::*;
/// # let logger = Logger::new();
/// use line_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_from(module_path!(), $level, format!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// ```
/// # use line_logger::prelude::*;
/// # let logger = Logger::new();
/// use line_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use line_logger::prelude::*;
/// # let logger = Logger::new();
/// use line_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// ```
/// # use line_logger::prelude::*;
/// # let logger = Logger::new();
/// use line_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured() -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .console_writer(buffer.clone())
            .build()
            .expect("console logger");
        (logger, buffer)
    }

    fn output(buffer: &SharedBuffer) -> String {
        String::from_utf8(buffer.0.lock().clone()).unwrap()
    }

    #[test]
    fn test_log_macro() {
        let (logger, buffer) = captured();
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        assert!(output(&buffer).ends_with("[INFO/line_logger::macros::tests] Formatted: 42\n"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = captured();
        trace!(logger, "t");
        debug!(logger, "d");
        info!(logger, "i");
        warn!(logger, "w {}", 1);
        error!(logger, "e");
        fatal!(logger, "f {}", "x");

        let text = output(&buffer);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("[TRACE/line_logger::macros::tests] t"));
        assert!(lines[3].contains("[WARN/line_logger::macros::tests] w 1"));
        assert!(lines[5].contains("[FATAL/line_logger::macros::tests] f x"));
    }
}
