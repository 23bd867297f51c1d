//! Bridge from the `log` facade
//!
//! Lets libraries that log through `log::info!` and friends write into a
//! [`Logger`]. Every record is emitted; there is no level filtering.

use crate::core::{CallSite, Logger, LoggerError, Result, Severity};
use crate::global::default_logger;

/// Map a facade level onto a severity. Levels below `Info` become `Info`.
pub fn severity_for(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warning,
        log::Level::Info | log::Level::Debug | log::Level::Trace => Severity::Info,
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let site = CallSite::from_parts(record.file(), record.line());
        let severity = severity_for(record.level());
        match record.args().as_str() {
            Some(message) => self.log_at(severity, &site, message),
            None => self.log_at(severity, &site, &record.args().to_string()),
        }
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}

/// Route the `log` facade into the default logger.
///
/// Fails if another logger has already been installed.
///
/// Once installed, `log` calls made by code running inside the default
/// logger's sink are dropped rather than written; see [`Sink`](crate::Sink).
pub fn install_log_bridge() -> Result<()> {
    log::set_logger(default_logger()).map_err(|e| LoggerError::BridgeInstall(e.to_string()))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
