//! Logger metrics
//!
//! File write failures are swallowed during emission, so these counters are
//! the way to notice lost lines without installing a hook.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for logger health
///
/// # Example
///
/// ```
/// use line_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.total_emitted(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Number of emission calls that reached at least one sink
    total_emitted: AtomicU64,

    /// Number of file writes that failed and were swallowed
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_emitted: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_emitted(&self) -> u64 {
        self.total_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record an emitted line, returning the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.total_emitted.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a swallowed write failure, returning the previous count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed file writes as a percentage of emitted lines (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let total = self.total_emitted() as f64;
        if total == 0.0 {
            0.0
        } else {
            (self.write_failures() as f64 / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.total_emitted.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_emitted: AtomicU64::new(self.total_emitted()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
