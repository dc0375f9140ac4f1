//! Interest-rate swaps on the short-rate lattice.

use bt_core::{ensure, Rate, Real, Result, Size};
use bt_instruments::SwapType;
use bt_lattice::{
    induct_backward, short_rate_lattice, AccrualTiming, Discount, Lattice, NodeRule,
};

/// Values an interest-rate swap with final payment at step `n`.
///
/// Each period exchanges the floating short rate against the fixed rate
/// `k` on notional 1. Like the caplet, a payment fixes at `t` and settles
/// at `t + 1`, so the boundary level sits at `n − 1`; unlike the caplet,
/// every interior node re-adds the period's net flow `φ(r − k)` before
/// discounting, since the swap exchanges payments at every step rather
/// than once.
#[derive(Debug, Clone)]
pub struct SwapEngine {
    /// Payer (pay fixed) or receiver (receive fixed).
    pub swap_type: SwapType,
    /// Fixed rate in percent.
    pub fixed_rate: Rate,
    /// Up-move multiplier of the short-rate model.
    pub u: Real,
    /// Down-move multiplier of the short-rate model.
    pub d: Real,
}

impl SwapEngine {
    /// Create an engine from the side, fixed rate, and rate model.
    pub fn new(swap_type: SwapType, fixed_rate: Rate, u: Real, d: Real) -> Self {
        Self {
            swap_type,
            fixed_rate,
            u,
            d,
        }
    }

    /// The swap value lattice over `n` levels (boundary at `n − 1` down
    /// to the root), terminal-to-root. `r0` is today's short rate in
    /// percent.
    pub fn value_lattice(&self, r0: Rate, n: Size) -> Result<Lattice> {
        ensure!(n >= 1, "the swap needs at least one exchange");
        let rates = short_rate_lattice(r0, n - 1, self.u, self.d).reversed();

        let sign = self.swap_type.sign();
        let boundary: Vec<Real> = rates
            .level(0)
            .iter()
            .map(|&r| 0.01 * sign * (r - self.fixed_rate) / (1.0 + 0.01 * r))
            .collect();

        let interior = &rates.levels()[1..];
        let net_flow =
            |s: Size, i: Size| 0.01 * sign * (interior[s][i] - self.fixed_rate);
        Ok(induct_backward(
            boundary,
            n - 1,
            0.5,
            Discount::NodeRate(interior),
            NodeRule::Accrual {
                cash_flow: &net_flow,
                timing: AccrualTiming::BeforeDiscount,
            },
        ))
    }

    /// The swap value today.
    pub fn value(&self, r0: Rate, n: Size) -> Result<Real> {
        Ok(self.value_lattice(r0, n)?.root_value())
    }
}
