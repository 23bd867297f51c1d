//! Sink trait for log output destinations

use super::error::Result;

/// Destination for formatted log lines.
///
/// Each call to [`Sink::write_all`] receives one complete line, newline
/// included. The logger serializes calls, so implementations need no locking
/// of their own.
///
/// # Reentrancy
///
/// Sink methods run while the owning logger's lock is held. A line logged
/// back into that same logger from inside a sink (directly or through the
/// `log` bridge) is dropped and counted in
/// [`LoggerMetrics::write_failures`](super::LoggerMetrics::write_failures).
/// Calling `configure`, `set_flags`, `flush` or `shutdown` on the owning
/// logger from a sink deadlocks, and so does a fatal line, which shuts the
/// logger down. Logging into a different logger is fine.
pub trait Sink: Send {
    fn write_all(&mut self, line: &[u8]) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Whether [`Sink::close`] releases an underlying resource.
    fn is_closable(&self) -> bool {
        false
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_all(&mut self, line: &[u8]) -> Result<()> {
        (**self).write_all(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn is_closable(&self) -> bool {
        (**self).is_closable()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
