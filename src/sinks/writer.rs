//! Sink over any `io::Write`

use crate::core::{Result, Sink};
use std::io::Write;

/// Adapts an arbitrary writer. Not closable; the writer is released when
/// the sink is dropped.
///
/// ```
/// use leveled_logger::{Flags, Logger, WriterSink};
///
/// let logger = Logger::with_sink(WriterSink::new(std::io::sink()), Flags::STANDARD);
/// logger.info(&[&"discarded"]);
/// ```
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_all(&mut self, line: &[u8]) -> Result<()> {
        self.writer.write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
