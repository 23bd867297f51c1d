//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file.
///
/// Closable: [`Sink::close`] flushes and releases the file handle, after
/// which every write fails with [`LoggerError::SinkClosed`].
pub struct FileSink {
    path: PathBuf,
    writer: Option<LineWriter<File>>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for append", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: Some(LineWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }
}

impl Sink for FileSink {
    fn write_all(&mut self, line: &[u8]) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink_closed(self.path.display().to_string()))?;
        writer.write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn is_closable(&self) -> bool {
        true
    }

    fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => {
                writer.flush()?;
                let file = writer.into_inner().map_err(|e| e.into_error())?;
                file.sync_all()?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
