//! Header formatting
//!
//! Renders `[DATE ][TIME[.micros] ][file:line ]TAG message` from a timestamp,
//! a call site and the active [`Flags`]. The output is a pure function of its
//! inputs; the trailing newline is added by the write path, not here.

use super::{caller::CallSite, flags::Flags, severity::Severity};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{self, Write};

/// Format a complete line (header plus message, without newline).
pub fn format_line(
    message: &str,
    severity: Severity,
    timestamp: DateTime<Utc>,
    site: &CallSite<'_>,
    flags: Flags,
) -> String {
    let mut out = String::with_capacity(64 + message.len());

    if flags.wants_timestamp() {
        if flags.contains(Flags::UTC) {
            push_timestamp(&mut out, &timestamp, flags);
        } else {
            push_timestamp(&mut out, &timestamp.with_timezone(&Local), flags);
        }
    }

    if flags.wants_caller() {
        let file = if flags.contains(Flags::SHORT_FILE) {
            site.short_file()
        } else {
            site.file()
        };
        let _ = write!(out, "{}:{} ", file, site.line());
    }

    out.push_str(severity.tag());
    out.push_str(message);
    out
}

fn push_timestamp<Tz>(out: &mut String, timestamp: &DateTime<Tz>, flags: Flags)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if flags.contains(Flags::DATE) {
        let _ = write!(out, "{} ", timestamp.format("%Y/%m/%d"));
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        let _ = write!(out, "{}", timestamp.format("%H:%M:%S"));
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(out, "{}", timestamp.format("%.6f"));
        }
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2009, 1, 23, 1, 23, 23)
            .single()
            .expect("valid fixed time")
            + chrono::Duration::microseconds(123_456)
    }

    const SITE: CallSite<'static> = CallSite::new("/a/b/c/main.rs", 23);

    #[test]
    fn test_no_flags_is_tag_and_message() {
        let line = format_line("hello", Severity::Info, fixed_time(), &SITE, Flags::NONE);
        assert_eq!(line, "INFO : hello");
    }

    #[test]
    fn test_full_utc_header() {
        let flags = Flags::DATE | Flags::MICROSECONDS | Flags::LONG_FILE | Flags::UTC;
        let line = format_line("boom", Severity::Error, fixed_time(), &SITE, flags);
        assert_eq!(line, "2009/01/23 01:23:23.123456 /a/b/c/main.rs:23 ERROR: boom");
    }

    #[test]
    fn test_standard_utc_header() {
        let line = format_line(
            "ok",
            Severity::Warning,
            fixed_time(),
            &SITE,
            Flags::STANDARD | Flags::UTC,
        );
        assert_eq!(line, "2009/01/23 01:23:23 main.rs:23 WARN : ok");
    }

    #[test]
    fn test_short_file_wins_over_long_file() {
        let flags = Flags::LONG_FILE | Flags::SHORT_FILE;
        let line = format_line("x", Severity::Info, fixed_time(), &SITE, flags);
        assert_eq!(line, "main.rs:23 INFO : x");
    }

    #[test]
    fn test_time_only_and_date_only() {
        let line = format_line("m", Severity::Fatal, fixed_time(), &SITE, Flags::TIME | Flags::UTC);
        assert_eq!(line, "01:23:23 FATAL: m");

        let line = format_line("m", Severity::Fatal, fixed_time(), &SITE, Flags::DATE | Flags::UTC);
        assert_eq!(line, "2009/01/23 FATAL: m");
    }

    #[test]
    fn test_local_time_header() {
        let ts = fixed_time();
        let local = ts.with_timezone(&Local);

        let line = format_line("m", Severity::Info, ts, &SITE, Flags::DATE | Flags::TIME);
        assert_eq!(line, format!("{} INFO : m", local.format("%Y/%m/%d %H:%M:%S")));

        let line = format_line("m", Severity::Info, ts, &SITE, Flags::MICROSECONDS);
        assert_eq!(line, format!("{}.123456 INFO : m", local.format("%H:%M:%S")));
    }

    #[test]
    fn test_utc_without_time_flags_renders_nothing() {
        let line = format_line("m", Severity::Info, fixed_time(), &SITE, Flags::UTC);
        assert_eq!(line, "INFO : m");
    }

    #[test]
    fn test_unknown_site() {
        let line = format_line("m", Severity::Info, fixed_time(), &CallSite::UNKNOWN, Flags::SHORT_FILE);
        assert_eq!(line, "???:0 INFO : m");
    }

    #[test]
    fn test_message_kept_verbatim() {
        let line = format_line("a\tb\n", Severity::Info, fixed_time(), &SITE, Flags::NONE);
        assert_eq!(line, "INFO : a\tb\n");
    }
}
