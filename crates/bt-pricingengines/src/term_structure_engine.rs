//! Zero-coupon bond prices and the implied term structure.

use bt_core::{ensure, Price, Rate, Real, Result, Size};
use bt_lattice::{induct_backward, short_rate_lattice, Discount, Lattice, NodeRule};

/// The zero-coupon curve point produced by [`TermStructureEngine`].
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    /// Spot rate for the bond's maturity, as a decimal fraction.
    pub spot_rate: Rate,
    /// Zero-coupon bond price lattice (face 100), terminal-to-root.
    pub prices: Lattice,
}

/// Derives zero-coupon bond prices from a short-rate lattice.
///
/// The bond pays 100 at maturity on every terminal node; earlier nodes
/// discount the expectation with the *node-local* short rate. Up and down
/// moves of the short rate are equally likely under the risk-neutral
/// measure, so the branch probability is ½.
#[derive(Debug, Clone)]
pub struct TermStructureEngine {
    /// Up-move multiplier of the short-rate model.
    pub u: Real,
    /// Down-move multiplier of the short-rate model.
    pub d: Real,
}

impl TermStructureEngine {
    /// Create an engine from the short-rate multipliers.
    pub fn new(u: Real, d: Real) -> Self {
        Self { u, d }
    }

    /// Price the zero-coupon bond maturing at step `n` and solve the
    /// implied spot rate `s_n = (100 / Z₀)^(1/n) − 1`.
    ///
    /// `r0` is today's short rate in percent.
    pub fn zero_curve(&self, r0: Rate, n: Size) -> Result<ZeroCurve> {
        ensure!(n >= 1, "a zero-coupon bond needs at least one period");
        let rates = short_rate_lattice(r0, n, self.u, self.d).reversed();
        let prices = induct_backward(
            vec![100.0; n + 1],
            n,
            0.5,
            Discount::NodeRate(&rates.levels()[1..]),
            NodeRule::European,
        );
        let spot_rate = (100.0 / prices.root_value()).powf(1.0 / n as Real) - 1.0;
        Ok(ZeroCurve { spot_rate, prices })
    }

    /// The zero-coupon bond price today, per 100 face value.
    pub fn zero_price(&self, r0: Rate, n: Size) -> Result<Price> {
        Ok(self.zero_curve(r0, n)?.prices.root_value())
    }
}
