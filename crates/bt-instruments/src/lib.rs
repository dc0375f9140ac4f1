//! # bt-instruments
//!
//! Instrument vocabulary shared by the pricing engines: option payoffs,
//! exercise styles, and the sign conventions of rate instruments.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Option exercise styles.
pub mod exercise;

/// Option payoff hierarchy.
pub mod payoff;

/// Swap and cap/floor conventions.
pub mod swap;

pub use exercise::ExerciseType;
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
pub use swap::{CapFloorType, SwapType};
