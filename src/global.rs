//! Process-wide default logger
//!
//! The default instance is created on first use with standard output as its
//! sink and [`Flags::STANDARD`]. The free functions here forward to it and
//! keep the caller's location, so `leveled_logger::info(..)` reports the line
//! it was called from.

use crate::core::{Flags, Logger, Operand, Sink};
use std::fmt;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, initialized on first access.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

/// Replace the default logger's sink and flags.
///
/// Usually called once near the start of `main`, before any logging.
pub fn configure<S: Sink + 'static>(sink: S, flags: Flags) {
    default_logger().configure(sink, flags);
}

/// Flush the default logger and close its sink if it is closable.
pub fn shutdown() {
    default_logger().shutdown();
}

#[track_caller]
pub fn info(operands: &[&dyn Operand]) {
    default_logger().info(operands);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

#[track_caller]
pub fn warning(operands: &[&dyn Operand]) {
    default_logger().warning(operands);
}

#[track_caller]
pub fn warningf(args: fmt::Arguments<'_>) {
    default_logger().warningf(args);
}

#[track_caller]
pub fn error(operands: &[&dyn Operand]) {
    default_logger().error(operands);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

/// Log at fatal severity through the default logger, then exit with status 1.
#[track_caller]
pub fn fatal(operands: &[&dyn Operand]) -> ! {
    default_logger().fatal(operands)
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}
