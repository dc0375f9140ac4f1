//! # bt-core
//!
//! Core types, aliases, and error definitions for binomtree-rs.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – primitive type aliases, the error
//! hierarchy with its `ensure!` / `fail!` macros, and numeric formatting
//! helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Numeric formatting helpers.
pub mod formatters;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// An interest rate. The short-rate lattices in this library quote rates
/// in **percent** (6.0 = 6 %); equity-side growth factors are plain
/// per-period factors (1.06 = 6 %). Each API documents which it takes.
pub type Rate = Real;

/// A price or value.
pub type Price = Real;

/// A per-period discount divisor.
pub type DiscountFactor = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
