//! Futures on a security.

use bt_core::{Price, Real, Result, Size};
use bt_lattice::{
    induct_backward, price_lattice, risk_neutral_probability, Discount, Lattice, NodeRule,
};

/// Values a futures contract written on a security.
///
/// The fair futures price at each node is the risk-neutral expectation of
/// the terminal security price, *undiscounted*: entering a futures
/// position costs nothing, so no money is tied up to earn the risk-free
/// rate.
#[derive(Debug, Clone)]
pub struct FuturesEngine {
    /// Up-move multiplier.
    pub u: Real,
    /// Down-move multiplier.
    pub d: Real,
    /// Additive payout (dividend) term, as a decimal.
    pub c: Real,
    /// Per-period risk-free growth factor `R = 1 + r`.
    pub growth: Real,
}

impl FuturesEngine {
    /// Create an engine from the model parameters.
    pub fn new(u: Real, d: Real, c: Real, growth: Real) -> Self {
        Self { u, d, c, growth }
    }

    /// The lattice of fair futures prices, terminal-to-root.
    pub fn value_lattice(&self, s0: Price, n: Size) -> Result<Lattice> {
        let q = risk_neutral_probability(self.growth, self.u, self.d, self.c)?;
        let terminal = price_lattice(s0, n, self.u, self.d, self.c)
            .terminal_level()
            .to_vec();
        Ok(induct_backward(
            terminal,
            n,
            q,
            Discount::None,
            NodeRule::European,
        ))
    }

    /// The fair futures price today.
    pub fn value(&self, s0: Price, n: Size) -> Result<Price> {
        Ok(self.value_lattice(s0, n)?.root_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn futures_price_grows_at_the_riskfree_rate() {
        // No dividends: fair futures price is S0 · R^n.
        let engine = FuturesEngine::new(1.2, 0.8, 0.0, 1.1);
        let price = engine.value(100.0, 3).unwrap();
        assert_abs_diff_eq!(price, 133.1, epsilon = 1e-10);
    }

    #[test]
    fn lattice_is_terminal_first_with_full_depth() {
        let engine = FuturesEngine::new(1.2, 0.8, 0.0, 1.1);
        let lattice = engine.value_lattice(100.0, 3).unwrap();
        assert_eq!(lattice.num_levels(), 4);
        assert_eq!(lattice.level(0).len(), 4);
        assert_eq!(lattice.level(3).len(), 1);
    }

    #[test]
    fn arbitrage_violating_growth_rejected() {
        let engine = FuturesEngine::new(1.2, 0.8, 0.0, 1.3);
        assert!(engine.value(100.0, 3).is_err());
    }
}
