//! Call-site resolution
//!
//! Entry points are `#[track_caller]`, so the location of the call is
//! known without walking the stack. Paths that cannot supply a location (for
//! example `log` records without file information) fall back to
//! [`CallSite::UNKNOWN`].

use std::panic::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
}

impl CallSite<'static> {
    /// Placeholder used when the caller cannot be resolved: `???:0`
    pub const UNKNOWN: CallSite<'static> = CallSite {
        file: "???",
        line: 0,
    };

    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        CallSite {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl<'a> CallSite<'a> {
    pub const fn new(file: &'a str, line: u32) -> Self {
        CallSite { file, line }
    }

    /// Build from optional parts, degrading to `???`/`0` when either is missing.
    pub fn from_parts(file: Option<&'a str>, line: Option<u32>) -> Self {
        match (file, line) {
            (Some(file), Some(line)) => CallSite { file, line },
            _ => CallSite {
                file: CallSite::UNKNOWN.file,
                line: CallSite::UNKNOWN.line,
            },
        }
    }

    pub fn file(&self) -> &'a str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Final path element of the file name.
    pub fn short_file(&self) -> &'a str {
        self.file.rsplit('/').next().unwrap_or(self.file)
    }
}
