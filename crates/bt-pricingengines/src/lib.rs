//! # bt-pricingengines
//!
//! One valuation engine per instrument family, each a thin composition of
//! the lattice builders and induction engines from `bt-lattice`:
//!
//! * [`FuturesEngine`] — futures on a security
//! * [`EquityOptionEngine`] — European/American options on a lattice
//! * [`TermStructureEngine`] — zero-coupon bond prices and spot rates
//! * [`BondOptionEngine`] — options on a zero-coupon bond
//! * [`BondForwardEngine`] / [`BondFutureEngine`] — forwards and futures
//!   on a coupon-bearing bond
//! * [`CapFloorEngine`] — caplets and floorlets
//! * [`SwapEngine`] / [`SwaptionEngine`] — interest-rate swaps and
//!   options on them
//!
//! Engines own their model parameters, validate preconditions up front,
//! and return full lattices; scalar summaries (spot rate, forward fair
//! price) come with the lattice where the instrument defines one. No
//! engine prints — render results with `bt_lattice::format_lattice`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bond_forward_engine;
pub mod bond_future_engine;
pub mod bond_option_engine;
pub mod cap_floor_engine;
pub mod equity_option_engine;
pub mod futures_engine;
pub mod swap_engine;
pub mod swaption_engine;
pub mod term_structure_engine;

pub use bond_forward_engine::{BondForwardEngine, BondForwardValue};
pub use bond_future_engine::BondFutureEngine;
pub use bond_option_engine::BondOptionEngine;
pub use cap_floor_engine::CapFloorEngine;
pub use equity_option_engine::EquityOptionEngine;
pub use futures_engine::FuturesEngine;
pub use swap_engine::SwapEngine;
pub use swaption_engine::SwaptionEngine;
pub use term_structure_engine::{TermStructureEngine, ZeroCurve};
