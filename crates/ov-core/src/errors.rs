//! Error types for optval-rs.
//!
//! A single `thiserror`-derived enum covers the whole workspace. The
//! `ensure!` and `fail!` macros are the standard way to reject invalid
//! parameters at construction or call time.

use crate::Real;
use thiserror::Error;

/// The top-level error type used throughout optval-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (invalid spot, strike, volatility, steps, …).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The derived risk-neutral probability fell outside [0, 1], so the
    /// step count / volatility combination admits arbitrage.
    #[error("risk-neutral probability {p} outside [0, 1]; no-arbitrage pricing impossible for this step count")]
    NoArbitrage {
        /// The offending probability.
        p: Real,
    },
}

/// Shorthand `Result` type used throughout optval-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ov_core::ensure;
/// fn positive(x: f64) -> ov_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ov_core::fail;
/// fn always_err() -> ov_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(x: f64) -> Result<f64> {
        crate::ensure!(x.is_finite() && x > 0.0, "x must be positive, got {x}");
        Ok(x)
    }

    #[test]
    fn ensure_accepts_and_rejects() {
        assert_eq!(check(2.0), Ok(2.0));
        assert!(matches!(check(-1.0), Err(Error::Precondition(_))));
        assert!(matches!(check(f64::NAN), Err(Error::Precondition(_))));
    }

    #[test]
    fn no_arbitrage_message_names_probability() {
        let e = Error::NoArbitrage { p: 1.25 };
        assert!(e.to_string().contains("1.25"));
    }
}
