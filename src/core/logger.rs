//! Main logger implementation
//!
//! A [`Logger`] owns one sink and one set of [`Flags`], both behind a single
//! mutex. Every entry point funnels into one emit routine that formats the
//! header, normalizes the trailing newline, and hands the finished line to
//! the sink in a single call while the lock is held, so concurrent callers
//! never interleave partial lines.

use super::{
    caller::CallSite,
    error::Result,
    flags::Flags,
    header::format_line,
    metrics::LoggerMetrics,
    print::{sprint, Operand},
    severity::Severity,
    sink::Sink,
};
use crate::sinks::ConsoleSink;
use chrono::Utc;
use parking_lot::Mutex;
use std::cell::RefCell;
use std::fmt;

/// Exit status used by the fatal entry points.
pub const FATAL_EXIT_CODE: i32 = 1;

thread_local! {
    // Loggers this thread is currently writing through
    static EMITTING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks a logger as busy on the current thread for the duration of a write.
struct EmitGuard {
    id: usize,
}

impl EmitGuard {
    /// `None` when the thread is already inside this logger's write path.
    fn enter(id: usize) -> Option<Self> {
        EMITTING
            .try_with(|active| {
                let mut active = active.borrow_mut();
                if active.contains(&id) {
                    None
                } else {
                    active.push(id);
                    Some(EmitGuard { id })
                }
            })
            .unwrap_or(Some(EmitGuard { id }))
    }
}

impl Drop for EmitGuard {
    fn drop(&mut self) {
        let _ = EMITTING.try_with(|active| {
            let mut active = active.borrow_mut();
            if let Some(pos) = active.iter().rposition(|id| *id == self.id) {
                active.remove(pos);
            }
        });
    }
}

struct LoggerState {
    sink: Box<dyn Sink>,
    flags: Flags,
}

pub struct Logger {
    state: Mutex<LoggerState>,
    /// Counters for accepted and discarded writes
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger writing to standard output with [`Flags::STANDARD`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink::stdout(), Flags::STANDARD)
    }

    #[must_use]
    pub fn with_sink<S: Sink + 'static>(sink: S, flags: Flags) -> Self {
        Self::from_boxed(Box::new(sink), flags)
    }

    fn from_boxed(sink: Box<dyn Sink>, flags: Flags) -> Self {
        Self {
            state: Mutex::new(LoggerState { sink, flags }),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Replace the sink and flags atomically.
    ///
    /// The previous sink is dropped, not closed.
    pub fn configure<S: Sink + 'static>(&self, sink: S, flags: Flags) {
        let previous = {
            let mut state = self.state.lock();
            state.flags = flags;
            std::mem::replace(&mut state.sink, Box::new(sink))
        };
        drop(previous);
    }

    pub fn set_flags(&self, flags: Flags) {
        self.state.lock().flags = flags;
    }

    pub fn flags(&self) -> Flags {
        self.state.lock().flags
    }

    /// Name of the current sink.
    pub fn sink_name(&self) -> String {
        self.state.lock().sink.name().to_string()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.state.lock().sink.flush()
    }

    /// Flush the sink and close it if it is closable.
    ///
    /// Errors from either step are discarded. The sink and flags stay in
    /// place; writes after a shutdown go to whatever the closed sink does
    /// with them.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        let _ = state.sink.flush();
        if state.sink.is_closable() {
            self.metrics.record_close();
            let _ = state.sink.close();
        }
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, operands: &[&dyn Operand]) {
        self.emit(Severity::Info, &CallSite::caller(), &sprint(operands));
    }

    #[track_caller]
    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit_args(Severity::Info, &CallSite::caller(), args);
    }

    #[track_caller]
    #[inline]
    pub fn warning(&self, operands: &[&dyn Operand]) {
        self.emit(Severity::Warning, &CallSite::caller(), &sprint(operands));
    }

    #[track_caller]
    #[inline]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.emit_args(Severity::Warning, &CallSite::caller(), args);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, operands: &[&dyn Operand]) {
        self.emit(Severity::Error, &CallSite::caller(), &sprint(operands));
    }

    #[track_caller]
    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit_args(Severity::Error, &CallSite::caller(), args);
    }

    /// Log at fatal severity, shut the logger down and exit with status 1.
    #[track_caller]
    pub fn fatal(&self, operands: &[&dyn Operand]) -> ! {
        self.emit(Severity::Fatal, &CallSite::caller(), &sprint(operands));
        self.terminate()
    }

    /// Formatted variant of [`Logger::fatal`].
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_args(Severity::Fatal, &CallSite::caller(), args);
        self.terminate()
    }

    /// Log a pre-built message.
    ///
    /// [`Severity::Fatal`] terminates the process exactly as [`Logger::fatal`].
    #[track_caller]
    pub fn log(&self, severity: Severity, message: &str) {
        self.log_at(severity, &CallSite::caller(), message);
    }

    /// Log with an explicit call site, for callers that resolve locations
    /// themselves.
    pub fn log_at(&self, severity: Severity, site: &CallSite<'_>, message: &str) {
        self.emit(severity, site, message);
        if severity.is_fatal() {
            self.terminate();
        }
    }

    fn emit_args(&self, severity: Severity, site: &CallSite<'_>, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(message) => self.emit(severity, site, message),
            None => self.emit(severity, site, &args.to_string()),
        }
    }

    fn emit(&self, severity: Severity, site: &CallSite<'_>, message: &str) {
        // Taken before the lock so waiting does not skew the timestamp.
        let now = Utc::now();

        // A sink that logs back into its own logger would wait on the lock forever.
        let Some(_guard) = EmitGuard::enter(self as *const Logger as usize) else {
            self.metrics.record_write_failure();
            return;
        };

        let mut state = self.state.lock();
        let mut line = format_line(message, severity, now, site, state.flags).into_bytes();
        if line.last() != Some(&b'\n') {
            line.push(b'\n');
        }

        match state.sink.write_all(&line) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(_) => {
                self.metrics.record_write_failure();
            }
        }
    }

    fn terminate(&self) -> ! {
        self.shutdown();
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.state.get_mut().sink.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("sink", &state.sink.name())
            .field("flags", &state.flags)
            .finish()
    }
}

/// Builder for [`Logger`]
pub struct LoggerBuilder {
    sink: Option<Box<dyn Sink>>,
    flags: Flags,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            sink: None,
            flags: Flags::STANDARD,
        }
    }

    /// Set the sink (standard output if never called)
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set the header flags (`Flags::STANDARD` if never called)
    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::stdout()));
        Logger::from_boxed(sink, self.flags)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use leveled_logger::prelude::*;
    ///
    /// let sink = MemorySink::new();
    /// let logger = Logger::builder()
    ///     .sink(sink.clone())
    ///     .flags(Flags::NONE)
    ///     .build();
    ///
    /// logger.infof(format_args!("listening on {}", 8080));
    /// assert_eq!(sink.contents(), "INFO : listening on 8080\n");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use crate::sinks::MemorySink;

    fn memory_logger(flags: Flags) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        (Logger::with_sink(sink.clone(), flags), sink)
    }

    #[test]
    fn test_default_builder() {
        let logger = LoggerBuilder::default().build();
        assert_eq!(logger.flags(), Flags::STANDARD);
        assert_eq!(logger.sink_name(), "stdout");
    }

    #[test]
    fn test_plain_and_formatted() {
        let (logger, sink) = memory_logger(Flags::NONE);
        logger.info(&[&"count", &1, &2]);
        logger.warningf(format_args!("retry {} of {}", 1, 3));
        logger.error(&[&"disk ", &"full"]);
        logger.errorf(format_args!("static"));

        assert_eq!(
            sink.lines(),
            vec![
                "INFO : count1 2",
                "WARN : retry 1 of 3",
                "ERROR: disk full",
                "ERROR: static",
            ]
        );
        assert_eq!(logger.metrics().lines_written(), 4);
    }

    #[test]
    fn test_trailing_newline_not_doubled() {
        let (logger, sink) = memory_logger(Flags::NONE);
        logger.infof(format_args!("already\n"));
        logger.infof(format_args!("bare"));
        assert_eq!(sink.contents(), "INFO : already\nINFO : bare\n");
    }

    #[test]
    fn test_caller_is_the_call_site() {
        let (logger, sink) = memory_logger(Flags::SHORT_FILE);
        let line = line!() + 1;
        logger.info(&[&"here"]);
        assert_eq!(sink.contents(), format!("logger.rs:{} INFO : here\n", line));
    }

    #[test]
    fn test_log_at_unknown_site() {
        let (logger, sink) = memory_logger(Flags::LONG_FILE);
        logger.log_at(Severity::Warning, &CallSite::UNKNOWN, "lost");
        assert_eq!(sink.contents(), "???:0 WARN : lost\n");
    }

    #[test]
    fn test_configure_replaces_sink_and_flags() {
        let (logger, first) = memory_logger(Flags::NONE);
        logger.log(Severity::Info, "one");

        let second = MemorySink::new();
        logger.configure(second.clone(), Flags::SHORT_FILE);
        logger.log(Severity::Info, "two");

        assert_eq!(first.contents(), "INFO : one\n");
        assert!(second.contents().ends_with(" INFO : two\n"));
        assert_eq!(logger.flags(), Flags::SHORT_FILE);
        assert_eq!(first.close_count(), 0);
    }

    #[test]
    fn test_shutdown_closes_once_per_call() {
        let (logger, sink) = memory_logger(Flags::NONE);
        logger.shutdown();
        assert_eq!(sink.close_count(), 1);
        assert_eq!(logger.metrics().close_calls(), 1);
        assert_eq!(logger.flags(), Flags::NONE);
    }

    #[test]
    fn test_write_failures_are_discarded() {
        struct FailingSink;
        impl Sink for FailingSink {
            fn write_all(&mut self, _line: &[u8]) -> Result<()> {
                Err(LoggerError::sink_closed("failing"))
            }
            fn name(&self) -> &str {
                "failing"
            }
        }

        let logger = Logger::with_sink(FailingSink, Flags::STANDARD);
        logger.info(&[&"dropped"]);
        logger.errorf(format_args!("dropped {}", 2));
        assert_eq!(logger.metrics().write_failures(), 2);
        assert_eq!(logger.metrics().lines_written(), 0);
    }

    #[test]
    fn test_writes_after_shutdown_are_discarded() {
        let (logger, sink) = memory_logger(Flags::NONE);
        logger.shutdown();
        logger.info(&[&"late"]);
        assert_eq!(sink.contents(), "");
        assert_eq!(logger.metrics().write_failures(), 1);
    }

    #[test]
    fn test_logging_from_inside_sink_is_dropped() {
        use std::sync::{Arc, OnceLock, Weak};

        struct EchoSink {
            logger: Arc<OnceLock<Weak<Logger>>>,
            inner: MemorySink,
        }
        impl Sink for EchoSink {
            fn write_all(&mut self, line: &[u8]) -> Result<()> {
                if let Some(logger) = self.logger.get().and_then(Weak::upgrade) {
                    logger.info(&[&"echo"]);
                }
                self.inner.write_all(line)
            }
            fn name(&self) -> &str {
                "echo"
            }
        }

        let slot = Arc::new(OnceLock::new());
        let memory = MemorySink::new();
        let sink = EchoSink {
            logger: Arc::clone(&slot),
            inner: memory.clone(),
        };
        let logger = Arc::new(Logger::with_sink(sink, Flags::NONE));
        slot.set(Arc::downgrade(&logger)).unwrap();

        logger.info(&[&"outer"]);
        logger.info(&[&"second"]);

        assert_eq!(memory.contents(), "INFO : outer\nINFO : second\n");
        assert_eq!(logger.metrics().lines_written(), 2);
        assert_eq!(logger.metrics().write_failures(), 2);
    }

    #[test]
    fn test_sink_may_log_into_another_logger() {
        struct ForwardSink {
            other: Logger,
        }
        impl Sink for ForwardSink {
            fn write_all(&mut self, line: &[u8]) -> Result<()> {
                self.other.infof(format_args!("saw {} bytes", line.len()));
                Ok(())
            }
            fn name(&self) -> &str {
                "forward"
            }
        }

        let memory = MemorySink::new();
        let other = Logger::with_sink(memory.clone(), Flags::NONE);
        let logger = Logger::with_sink(ForwardSink { other }, Flags::NONE);
        logger.info(&[&"abc"]);

        assert_eq!(memory.contents(), "INFO : saw 11 bytes\n");
        assert_eq!(logger.metrics().write_failures(), 0);
    }

    #[test]
    fn test_debug_output() {
        let (logger, _sink) = memory_logger(Flags::UTC);
        let debug = format!("{:?}", logger);
        assert!(debug.contains("memory"));
    }
}
