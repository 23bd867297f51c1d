//! Header format flags
//!
//! A [`Flags`] value selects which components are rendered in front of each
//! message. The bits are independent and combine with `|`:
//!
//! ```
//! use leveled_logger::Flags;
//!
//! let flags = Flags::DATE | Flags::TIME | Flags::MICROSECONDS | Flags::UTC;
//! assert!(flags.contains(Flags::UTC));
//! assert!(!flags.intersects(Flags::LONG_FILE | Flags::SHORT_FILE));
//! ```

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(u32);

impl Flags {
    /// No header at all: only the severity tag and the message.
    pub const NONE: Flags = Flags(0);
    /// The date: `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// The time: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file name and line number: `/a/b/c/main.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path element and line number: `main.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Render date and time in UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Initial flags of the default logger.
    pub const STANDARD: Flags = Flags(Self::DATE.0 | Self::TIME.0 | Self::SHORT_FILE.0);

    const ALL_BITS: u32 = (1 << 6) - 1;

    const NAMES: [(&'static str, Flags); 6] = [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("longfile", Flags::LONG_FILE),
        ("shortfile", Flags::SHORT_FILE),
        ("utc", Flags::UTC),
    ];

    /// Build flags from raw bits, dropping bits that name no option.
    pub const fn from_bits(bits: u32) -> Self {
        Flags(bits & Self::ALL_BITS)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set.
    pub const fn contains(&self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when at least one bit of `other` is set.
    pub const fn intersects(&self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the header carries a date or time component.
    pub const fn wants_timestamp(&self) -> bool {
        self.intersects(Flags(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0))
    }

    /// Whether the header carries a `file:line` component.
    pub const fn wants_caller(&self) -> bool {
        self.intersects(Flags(Self::LONG_FILE.0 | Self::SHORT_FILE.0))
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::STANDARD
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (name, flag) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = LoggerError;

    /// Parse a `|` or `,` separated list such as `date|time|shortfile`.
    ///
    /// `std`/`standard` expands to [`Flags::STANDARD`]; `none` or an empty
    /// string yields [`Flags::NONE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::NONE;
        for token in s.split(['|', ',']).map(str::trim).filter(|t| !t.is_empty()) {
            let lowered = token.to_ascii_lowercase();
            flags |= match lowered.as_str() {
                "none" => Flags::NONE,
                "std" | "standard" => Flags::STANDARD,
                "micro" | "micros" => Flags::MICROSECONDS,
                "long" => Flags::LONG_FILE,
                "short" => Flags::SHORT_FILE,
                other => Self::NAMES
                    .iter()
                    .find(|(name, _)| *name == other)
                    .map(|(_, flag)| *flag)
                    .ok_or_else(|| LoggerError::invalid_flags(token))?,
            };
        }
        Ok(flags)
    }
}
