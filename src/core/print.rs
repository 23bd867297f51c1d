//! Print-style message joining
//!
//! The plain entry points take a list of operands and join them the way a
//! `Print` call would: operands are written back to back, and a single space
//! is inserted only between two adjacent operands that are both non-strings.
//!
//! ```
//! use leveled_logger::{sprint, Operand};
//!
//! assert_eq!(sprint(&[&"a", &1, &2, &"b"]), "a1 2b");
//! assert_eq!(sprint(&[&"x=", &3.5, &true]), "x=3.5 true");
//! ```

use std::borrow::Cow;
use std::fmt::{self, Write};

/// A value that can appear in a plain-style log call.
///
/// String-like types report `is_string() == true`; everything else uses the
/// default. Implement it for your own `Display` types to pass them directly.
pub trait Operand: fmt::Display {
    fn is_string(&self) -> bool {
        false
    }
}

impl Operand for str {
    fn is_string(&self) -> bool {
        true
    }
}

impl Operand for String {
    fn is_string(&self) -> bool {
        true
    }
}

impl Operand for Cow<'_, str> {
    fn is_string(&self) -> bool {
        true
    }
}

impl Operand for fmt::Arguments<'_> {
    fn is_string(&self) -> bool {
        true
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

macro_rules! non_string_operand {
    ($($t:ty),* $(,)?) => {
        $(impl Operand for $t {})*
    };
}

non_string_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    std::net::IpAddr, std::net::SocketAddr,
);

impl Operand for dyn std::error::Error + '_ {}

impl Operand for std::path::Display<'_> {
    fn is_string(&self) -> bool {
        true
    }
}

/// A borrowed `Display` value whose string-ness was decided by the caller.
///
/// The plain-style macros build these so that any `Display` type can be
/// passed, including types from other crates that cannot implement
/// [`Operand`] here.
#[derive(Clone, Copy)]
pub struct Arg<'a> {
    value: &'a dyn fmt::Display,
    is_string: bool,
}

impl<'a> Arg<'a> {
    pub fn string(value: &'a dyn fmt::Display) -> Self {
        Arg {
            value,
            is_string: true,
        }
    }

    pub fn other(value: &'a dyn fmt::Display) -> Self {
        Arg {
            value,
            is_string: false,
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl Operand for Arg<'_> {
    fn is_string(&self) -> bool {
        self.is_string
    }
}

// Macro support: `(&ArgKind(&value)).to_arg()` resolves to `KnownOperand`
// when the value implements `Operand` and falls back to `DisplayOperand`
// through autoref, treating it as a non-string.
#[doc(hidden)]
pub struct ArgKind<'a, T>(pub &'a T);

#[doc(hidden)]
pub trait KnownOperand<'a> {
    fn to_arg(&self) -> Arg<'a>;
}

impl<'a, T: Operand + 'a> KnownOperand<'a> for ArgKind<'a, T> {
    fn to_arg(&self) -> Arg<'a> {
        Arg {
            value: self.0,
            is_string: self.0.is_string(),
        }
    }
}

#[doc(hidden)]
pub trait DisplayOperand<'a> {
    fn to_arg(&self) -> Arg<'a>;
}

impl<'a, T: fmt::Display + 'a> DisplayOperand<'a> for &ArgKind<'a, T> {
    fn to_arg(&self) -> Arg<'a> {
        Arg::other(self.0)
    }
}

/// Join operands using the Print spacing rule.
pub fn sprint(operands: &[&dyn Operand]) -> String {
    let mut out = String::new();
    let mut prev_is_string = true;
    for (idx, operand) in operands.iter().enumerate() {
        let is_string = operand.is_string();
        if idx > 0 && !is_string && !prev_is_string {
            out.push(' ');
        }
        let _ = write!(out, "{}", operand);
        prev_is_string = is_string;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_are_concatenated() {
        assert_eq!(sprint(&[&"foo", &"bar", &String::from("baz")]), "foobarbaz");
    }

    #[test]
    fn test_numbers_are_spaced() {
        assert_eq!(sprint(&[&1, &2, &3u64]), "1 2 3");
    }

    #[test]
    fn test_mixed() {
        assert_eq!(sprint(&[&"n=", &1, &2, &"!"]), "n=1 2!");
        assert_eq!(sprint(&[&'a', &false]), "a false");
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(sprint(&[]), "");
        assert_eq!(sprint(&[&42]), "42");
    }

    #[test]
    fn test_arg_kind_dispatch() {
        let owned = String::from("s");
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");

        assert!((&ArgKind(&"lit")).to_arg().is_string());
        assert!((&ArgKind(&owned)).to_arg().is_string());
        assert!((&ArgKind(&Cow::Borrowed("cow"))).to_arg().is_string());
        assert!(!(&ArgKind(&7u8)).to_arg().is_string());
        assert!(!(&ArgKind(&err)).to_arg().is_string());
        assert!((&ArgKind(&format_args!("f"))).to_arg().is_string());

        let args = [
            (&ArgKind(&"read: ")).to_arg(),
            (&ArgKind(&err)).to_arg(),
            (&ArgKind(&1.5f64)).to_arg(),
        ];
        let operands: Vec<&dyn Operand> = args.iter().map(|a| a as &dyn Operand).collect();
        assert_eq!(sprint(&operands), "read: gone 1.5");
    }

    #[test]
    fn test_custom_operand() {
        struct Port(u16);
        impl fmt::Display for Port {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, ":{}", self.0)
            }
        }
        impl Operand for Port {}

        assert_eq!(sprint(&[&"listening", &Port(80), &7]), "listening:80 7");
    }
}
