//! Logging macros
//!
//! The plain macros take a comma-separated list of operands and join them
//! with the Print spacing rule; the `f`-suffixed macros take a `format!`
//! template. Both write through the process-wide logger unless the first
//! token is `@logger;`, which targets an explicit [`Logger`](crate::Logger).
//!
//! Plain operands may be any `Display` value. Types implementing
//! [`Operand`](crate::Operand) keep their own string-ness; every other type,
//! such as `std::io::Error`, joins as a non-string.
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, infof, warning};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::with_sink(sink.clone(), Flags::NONE);
//!
//! info!(@logger; "items ", 3, 4);
//! infof!(@logger; "listening on port {}", 8080);
//! warning!(@logger; "low disk");
//!
//! assert_eq!(
//!     sink.lines(),
//!     vec!["INFO : items 3 4", "INFO : listening on port 8080", "WARN : low disk"]
//! );
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __operands {
    ($($arg:expr),+) => {
        &[$(&(&$crate::__private::ArgKind(&$arg)).to_arg() as &dyn $crate::Operand),+]
    };
}

/// Log operands at info severity.
///
/// ```
/// use leveled_logger::info;
/// let user = "alice";
/// info!("user ", user, " logged in after ", 3, 2, " retries");
/// ```
#[macro_export]
macro_rules! info {
    (@$logger:expr; $($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DisplayOperand as _, KnownOperand as _};
        $logger.info($crate::__operands!($($arg),+))
    }};
    ($($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DisplayOperand as _, KnownOperand as _};
        $crate::info($crate::__operands!($($arg),+))
    }};
}

/// Log a formatted message at info severity.
///
/// ```
/// use leveled_logger::infof;
/// infof!("processing {} items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    (@$logger:expr; $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(format_args!($($arg)+))
    };
}

/// Log operands at warning severity.
#[macro_export]
macro_rules! warning {
    (@$logger:expr; $($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DisplayOperand as _, KnownOperand as _};
        $logger.warning($crate::__operands!($($arg),+))
    }};
    ($($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DisplayOperand as _, KnownOperand as _};
        $crate::warning($crate::__operands!($($arg),+))
    }};
}

/// Log a formatted message at warning severity.
#[macro_export]
macro_rules! warningf {
    (@$logger:expr; $($arg:tt)+) => {
        $logger.warningf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warningf(format_args!($($arg)+))
    };
}

/// Log operands at error severity.
#[macro_export]
macro_rules! error {
    (@$logger:expr; $($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DisplayOperand as _, KnownOperand as _};
        $logger.error($crate::__operands!($($arg),+))
    }};
    ($($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DisplayOperand as _, KnownOperand as _};
        $crate::error($crate::__operands!($($arg),+))
    }};
}

/// Log a formatted message at error severity.
///
/// ```
/// use leveled_logger::errorf;
/// errorf!("code: {}, message: {}", 500, "internal error");
/// ```
#[macro_export]
macro_rules! errorf {
    (@$logger:expr; $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(format_args!($($arg)+))
    };
}

/// Log operands at fatal severity and exit the process with status 1.
///
/// ```no_run
/// use leveled_logger::fatal;
/// fatal!("unable to recover: ", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    (@$logger:expr; $($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DisplayOperand as _, KnownOperand as _};
        $logger.fatal($crate::__operands!($($arg),+))
    }};
    ($($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DisplayOperand as _, KnownOperand as _};
        $crate::fatal($crate::__operands!($($arg),+))
    }};
}

/// Log a formatted message at fatal severity and exit the process with status 1.
#[macro_export]
macro_rules! fatalf {
    (@$logger:expr; $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatalf(format_args!($($arg)+))
    };
}
