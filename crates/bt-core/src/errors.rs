//! Error types for binomtree-rs.
//!
//! A single `thiserror`-derived enum covers every failure mode of the
//! lattice engines. Most variants are precondition violations: the
//! valuators validate their inputs (no-arbitrage band, maturity
//! consistency) up front and never panic afterwards.

use thiserror::Error;

/// The top-level error type used throughout binomtree-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (e.g. degenerate multipliers, arbitrage).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },
}

/// Shorthand `Result` type used throughout binomtree-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Require a precondition to hold.
///
/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bt_core::ensure;
/// fn positive(x: f64) -> bt_core::errors::Result<f64> {
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

/// Bail out with a runtime error.
///
/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use bt_core::fail;
/// fn always_err() -> bt_core::errors::Result<()> {
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
