//! Futures on a coupon-bearing bond.

use bt_core::{Price, Rate, Real, Result, Size};
use bt_lattice::{induct_backward, Discount, Lattice, LevelOrder, NodeRule};

use crate::bond_forward_engine::BondForwardEngine;

/// Values a futures contract on a coupon-bearing bond.
///
/// Delivery prices at the futures maturity are the same as the forward's,
/// so the engine reuses the forward's lattice up to step `t_future` and
/// then contracts without discounting: a futures position costs nothing
/// to enter, so its fair price is a pure risk-neutral expectation.
#[derive(Debug, Clone)]
pub struct BondFutureEngine {
    /// Up-move multiplier of the short-rate model.
    pub u: Real,
    /// Down-move multiplier of the short-rate model.
    pub d: Real,
    /// Coupon per period, in price units per 100 face (percent coupon).
    pub coupon: Real,
}

impl BondFutureEngine {
    /// Create an engine from the rate model and coupon.
    pub fn new(u: Real, d: Real, coupon: Real) -> Self {
        Self { u, d, coupon }
    }

    /// The fair-price lattice of the futures delivering at `t_future` a
    /// bond maturing at `n`, terminal-to-root. `r0` is today's short rate
    /// in percent. Requires `1 ≤ t_future < n`.
    pub fn value_lattice(&self, r0: Rate, t_future: Size, n: Size) -> Result<Lattice> {
        let forward = BondForwardEngine::new(self.u, self.d, self.coupon)
            .value(r0, t_future, n)?
            .lattice;

        // Keep the forward's levels down to the delivery step, then take
        // undiscounted expectations the rest of the way.
        let kept = &forward.levels()[..n - t_future + 1];
        let delivery = kept[kept.len() - 1].clone();
        let expectation = induct_backward(
            delivery,
            t_future,
            0.5,
            Discount::None,
            NodeRule::European,
        );

        let mut levels = kept.to_vec();
        levels.extend_from_slice(&expectation.levels()[1..]);
        Ok(Lattice::from_levels(levels, LevelOrder::TerminalToRoot))
    }

    /// The fair futures price today.
    pub fn value(&self, r0: Rate, t_future: Size, n: Size) -> Result<Price> {
        Ok(self.value_lattice(r0, t_future, n)?.root_value())
    }
}
