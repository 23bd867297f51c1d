//! Severity definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info = 0,
    Warning = 1,
    Error = 2,
    Fatal = 3,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// The padded tag written in front of every message.
    ///
    /// Every tag is exactly seven bytes and already ends with `": "`.
    pub const fn tag(&self) -> &'static str {
        match self {
            Severity::Info => "INFO : ",
            Severity::Warning => "WARN : ",
            Severity::Error => "ERROR: ",
            Severity::Fatal => "FATAL: ",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Whether emitting at this severity ends the process.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(LoggerError::invalid_severity(s)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| LoggerError::invalid_severity(value.to_string()))
    }
}
