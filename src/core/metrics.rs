//! Logger metrics
//!
//! Write and close failures are never returned to the caller of a log
//! function. These counters are the only place they become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for logger health
///
/// # Example
///
/// ```
/// use leveled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines the sink accepted
    lines_written: AtomicU64,

    /// Lines the sink rejected (discarded)
    write_failures: AtomicU64,

    /// Times a closable sink was closed
    close_calls: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            close_calls: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn close_calls(&self) -> u64 {
        self.close_calls.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_close(&self) {
        self.close_calls.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            close_calls: AtomicU64::new(self.close_calls()),
        }
    }
}
