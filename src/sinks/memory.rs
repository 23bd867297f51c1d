//! In-memory sink

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Buffer {
    bytes: Vec<u8>,
    closed: bool,
    close_count: usize,
}

/// Shared in-memory buffer.
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and inspect the other. Closable: after [`Sink::close`] writes fail with
/// [`LoggerError::SinkClosed`].
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<Buffer>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.inner.lock().bytes.clone()
    }

    /// Buffer contents, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().bytes).into_owned()
    }

    /// Contents split into lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.inner.lock().bytes.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    /// Number of times [`Sink::close`] has been called.
    pub fn close_count(&self) -> usize {
        self.inner.lock().close_count
    }
}

impl Sink for MemorySink {
    fn write_all(&mut self, line: &[u8]) -> Result<()> {
        let mut buffer = self.inner.lock();
        if buffer.closed {
            return Err(LoggerError::sink_closed("memory"));
        }
        buffer.bytes.extend_from_slice(line);
        Ok(())
    }

    fn is_closable(&self) -> bool {
        true
    }

    fn close(&mut self) -> Result<()> {
        let mut buffer = self.inner.lock();
        buffer.closed = true;
        buffer.close_count += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
