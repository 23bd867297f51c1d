//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes lines to standard output or standard error.
///
/// Not closable: shutting the logger down only flushes the stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Sink for ConsoleSink {
    fn write_all(&mut self, line: &[u8]) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => io::stdout().lock().write_all(line)?,
            ConsoleStream::Stderr => io::stderr().lock().write_all(line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => io::stdout().flush()?,
            ConsoleStream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}
