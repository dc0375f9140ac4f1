//! Caplets and floorlets on the short rate.

use bt_core::{ensure, Rate, Real, Result, Size};
use bt_instruments::CapFloorType;
use bt_lattice::{induct_backward, short_rate_lattice, Discount, Lattice, NodeRule};

/// Values a single caplet or floorlet settling at step `n`.
///
/// The payoff fixes on the rate observed at `t = n − 1` and pays one
/// period later, so the boundary level is evaluated at `n − 1` with the
/// settlement discount `1 + r` folded in, and induction runs over the
/// remaining `n − 1` steps with node-local discounting. Notional is 1.
#[derive(Debug, Clone)]
pub struct CapFloorEngine {
    /// Cap (call on the rate) or floor (put on the rate).
    pub kind: CapFloorType,
    /// Strike rate in percent.
    pub strike: Rate,
    /// Up-move multiplier of the short-rate model.
    pub u: Real,
    /// Down-move multiplier of the short-rate model.
    pub d: Real,
}

impl CapFloorEngine {
    /// Create an engine from the flavour, strike, and rate model.
    pub fn new(kind: CapFloorType, strike: Rate, u: Real, d: Real) -> Self {
        Self { kind, strike, u, d }
    }

    /// The value lattice over `n` levels (boundary at `n − 1` down to the
    /// root), terminal-to-root. `r0` is today's short rate in percent.
    pub fn value_lattice(&self, r0: Rate, n: Size) -> Result<Lattice> {
        ensure!(n >= 1, "settlement must be at least one period out");
        let rates = short_rate_lattice(r0, n - 1, self.u, self.d).reversed();

        let sign = self.kind.sign();
        let boundary: Vec<Real> = rates
            .level(0)
            .iter()
            .map(|&r| 0.01 * (sign * (r - self.strike)).max(0.0) / (1.0 + 0.01 * r))
            .collect();

        Ok(induct_backward(
            boundary,
            n - 1,
            0.5,
            Discount::NodeRate(&rates.levels()[1..]),
            NodeRule::European,
        ))
    }

    /// The caplet/floorlet value today.
    pub fn value(&self, r0: Rate, n: Size) -> Result<Real> {
        Ok(self.value_lattice(r0, n)?.root_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn caplet_matches_reference() {
        let value = CapFloorEngine::new(CapFloorType::Cap, 7.0, 1.25, 0.9)
            .value(6.0, 6)
            .unwrap();
        assert_abs_diff_eq!(value, 0.012549822060791327, epsilon = 1e-12);
    }

    #[test]
    fn floorlet_matches_reference() {
        let value = CapFloorEngine::new(CapFloorType::Floor, 7.0, 1.25, 0.9)
            .value(6.0, 6)
            .unwrap();
        assert_abs_diff_eq!(value, 0.0035355915760455882, epsilon = 1e-12);
    }

    #[test]
    fn one_period_caplet_is_the_discounted_boundary() {
        // n = 1: the boundary value at the root is the whole lattice.
        let value = CapFloorEngine::new(CapFloorType::Cap, 5.0, 1.25, 0.9)
            .value(6.0, 1)
            .unwrap();
        assert_abs_diff_eq!(value, 0.01 * 1.0 / 1.06, epsilon = 1e-15);
    }

    #[test]
    fn immediate_settlement_rejected() {
        assert!(CapFloorEngine::new(CapFloorType::Cap, 7.0, 1.25, 0.9)
            .value(6.0, 0)
            .is_err());
    }
}
