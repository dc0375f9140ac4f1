//! # bt-lattice
//!
//! Recombining binomial lattices and the induction engines that operate
//! on them.
//!
//! # Overview
//!
//! * [`Lattice`] — the triangular container of node values, tagged with
//!   its level ordering ([`LevelOrder`])
//! * [`price_lattice`] / [`short_rate_lattice`] — forward recombining
//!   builders for security prices and short rates
//! * [`risk_neutral_probability`] — the per-step martingale probability
//! * [`induct_backward`] — the single parameterized backward-induction
//!   engine, with its closed sets of [`Discount`] and [`NodeRule`]
//!   variants
//! * [`elementary_prices`] — forward induction of Arrow-Debreu state
//!   prices
//! * [`format_lattice`] — text rendering with true time-index labels

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod backward;
pub mod builder;
pub mod formatters;
pub mod forward;
pub mod lattice;
pub mod probability;

pub use backward::{induct_backward, AccrualTiming, Discount, NodeRule};
pub use builder::{price_lattice, short_rate_lattice};
pub use formatters::format_lattice;
pub use forward::elementary_prices;
pub use lattice::{Lattice, LevelOrder};
pub use probability::risk_neutral_probability;
