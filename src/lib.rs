//! # Leveled Logger
//!
//! A process-wide leveled logger: one shared sink that receives timestamped,
//! severity-tagged text lines.
//!
//! ## Features
//!
//! - **Four severities**: Info, Warning, Error and Fatal (which exits the process)
//! - **Configurable header**: date, time, microseconds, UTC, long or short caller file
//! - **Pluggable sink**: console, file, any `io::Write`, or an in-memory buffer
//! - **Thread safe**: one lock serializes configuration and writes, so lines never interleave
//!
//! ```
//! use leveled_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::with_sink(sink.clone(), Flags::SHORT_FILE);
//! logger.warning(&[&"cache miss for ", &"user:42"]);
//! assert!(sink.contents().contains(" WARN : cache miss for user:42\n"));
//! ```

pub mod bridge;
pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, Flags, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Operand, Result,
        Severity, Sink,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
}

#[doc(hidden)]
pub mod __private {
    pub use crate::core::print::{Arg, ArgKind, DisplayOperand, KnownOperand};
}

pub use bridge::install_log_bridge;
pub use crate::core::{
    format_line, sprint, CallSite, Flags, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    Operand, Result, Severity, Sink, FATAL_EXIT_CODE,
};
pub use global::{
    configure, default_logger, error, errorf, fatal, fatalf, info, infof, shutdown, warning,
    warningf,
};
pub use sinks::{ConsoleSink, ConsoleStream, FileSink, MemorySink, WriterSink};
