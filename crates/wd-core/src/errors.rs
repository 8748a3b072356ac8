//! Error types for the workday calendar.
//!
//! Every fallible operation is a configuration call, so the hierarchy is a
//! single `thiserror`-derived enum with one variant per rejection reason.
//! The [`ensure!`](crate::ensure) macro is the early-return shorthand used by
//! the validating constructors.

use thiserror::Error;

/// The top-level error type used throughout the workday crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A working schedule whose start is not strictly before its stop.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A month, day, hour, or minute outside its valid range.
    #[error("value out of range: {0}")]
    OutOfRange(String),
}

/// Shorthand `Result` type used throughout the workday crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::$kind(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Result};
/// fn month(m: u32) -> Result<u32> {
///     ensure!((1..=12).contains(&m), OutOfRange, "month {m} not in [1, 12]");
///     Ok(m)
/// }
/// assert!(month(5).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_positive(x: i32) -> Result<i32> {
        crate::ensure!(x > 0, InvalidConfiguration, "x must be positive, got {x}");
        Ok(x)
    }

    #[test]
    fn ensure_passes_through() {
        assert_eq!(check_positive(3), Ok(3));
    }

    #[test]
    fn ensure_returns_named_variant() {
        let err = check_positive(-1).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfiguration("x must be positive, got -1".into())
        );
        assert_eq!(
            err.to_string(),
            "invalid configuration: x must be positive, got -1"
        );
    }
}
