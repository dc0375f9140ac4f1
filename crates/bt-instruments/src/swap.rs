//! Sign conventions for rate instruments.

use bt_core::Real;

/// Payer or receiver side of an interest-rate swap.
///
/// The payer pays the fixed rate and receives floating, so its per-period
/// flow is `φ(r − k)` with `φ = +1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapType {
    /// Pay fixed, receive floating.
    Payer,
    /// Receive fixed, pay floating.
    Receiver,
}

impl SwapType {
    /// +1 for Payer, −1 for Receiver.
    pub fn sign(self) -> Real {
        match self {
            SwapType::Payer => 1.0,
            SwapType::Receiver => -1.0,
        }
    }
}

/// Cap or floor side of a single-period rate option.
///
/// A caplet pays when the observed rate exceeds the strike, so its sign
/// convention matches a call on the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapFloorType {
    /// Pays `max(r − k, 0)` (call on the rate).
    Cap,
    /// Pays `max(k − r, 0)` (put on the rate).
    Floor,
}

impl CapFloorType {
    /// +1 for Cap, −1 for Floor.
    pub fn sign(self) -> Real {
        match self {
            CapFloorType::Cap => 1.0,
            CapFloorType::Floor => -1.0,
        }
    }
}
