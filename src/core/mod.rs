//! Core logger types and traits

pub mod caller;
pub mod error;
pub mod flags;
pub mod header;
pub mod logger;
pub mod metrics;
pub mod print;
pub mod severity;
pub mod sink;

pub use caller::CallSite;
pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use header::format_line;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use print::{sprint, Operand};
pub use severity::Severity;
pub use sink::Sink;
