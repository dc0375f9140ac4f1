//! # binomtree
//!
//! Arbitrage-free risk-neutral pricing of securities — equities, futures,
//! options, zero-coupon bonds, and interest-rate derivatives — on
//! recombining binomial lattices.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! binomtree = "0.1"
//! ```
//!
//! ```rust
//! use binomtree::lattice::{format_lattice, price_lattice};
//!
//! let tree = price_lattice(100.0, 2, 1.2, 0.8, 0.0);
//! assert_eq!(tree.level(2), &[144.0, 96.0, 64.0]);
//! println!("{}", format_lattice(&tree, 4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use bt_core as core;

/// Lattices, induction engines, and the lattice formatter.
pub use bt_lattice as lattice;

/// Instrument vocabulary: payoffs, exercise styles, swap conventions.
pub use bt_instruments as instruments;

/// Instrument valuation engines.
pub use bt_pricingengines as pricingengines;
