//! Forwards on a coupon-bearing bond.

use bt_core::{ensure, Price, Rate, Real, Result, Size};
use bt_lattice::{
    induct_backward, short_rate_lattice, AccrualTiming, Discount, Lattice, LevelOrder, NodeRule,
};

use crate::term_structure_engine::TermStructureEngine;

/// Result of a bond-forward valuation.
#[derive(Debug, Clone)]
pub struct BondForwardValue {
    /// The fair forward price `G₀` agreed today for delivery at `t_forward`.
    pub fair_price: Price,
    /// The discounted cash lattice behind it, terminal-to-root.
    pub lattice: Lattice,
}

/// Values a forward contract for delivery of a coupon-bearing bond.
///
/// Until the delivery date the bond's coupons accrue to the *holder of
/// the bond*, so the first `n − 1 − T` induction steps re-add the coupon
/// at every node after discounting; the remaining steps discount
/// coupon-free, since the forward itself pays nothing. The fair price
/// normalizes the root by the zero-coupon price for the delivery date.
/// Nominal face value is 100; scale the fair price for other notionals.
#[derive(Debug, Clone)]
pub struct BondForwardEngine {
    /// Up-move multiplier of the short-rate model.
    pub u: Real,
    /// Down-move multiplier of the short-rate model.
    pub d: Real,
    /// Coupon per period, in price units per 100 face (percent coupon).
    pub coupon: Real,
}

impl BondForwardEngine {
    /// Create an engine from the rate model and coupon.
    pub fn new(u: Real, d: Real, coupon: Real) -> Self {
        Self { u, d, coupon }
    }

    /// Value the forward delivering at `t_forward` a bond maturing at `n`.
    /// `r0` is today's short rate in percent. Requires `1 ≤ t_forward < n`.
    pub fn value(&self, r0: Rate, t_forward: Size, n: Size) -> Result<BondForwardValue> {
        ensure!(
            t_forward >= 1,
            "forward delivery must be at least one period out"
        );
        ensure!(
            t_forward < n,
            "forward delivery ({t_forward}) must precede bond maturity ({n})"
        );

        let rates = short_rate_lattice(r0, n, self.u, self.d).reversed();
        let term_structure = TermStructureEngine::new(self.u, self.d);
        let bond = term_structure.zero_curve(r0, n)?.prices;

        // The bond pays its final coupon together with the principal.
        let terminal: Vec<Real> = bond.level(0).iter().map(|&z| z + self.coupon).collect();

        let accrual_steps = n - 1 - t_forward;
        let coupon = |_s: Size, _i: Size| self.coupon;
        let with_coupons = induct_backward(
            terminal,
            accrual_steps,
            0.5,
            Discount::NodeRate(&rates.levels()[1..]),
            NodeRule::Accrual {
                cash_flow: &coupon,
                timing: AccrualTiming::AfterDiscount,
            },
        );

        // Past the last pre-delivery coupon the forward is a pure claim:
        // discount the ex-coupon bond value down to the root.
        let handover = with_coupons.level(accrual_steps).to_vec();
        let coupon_free = induct_backward(
            handover,
            t_forward + 1,
            0.5,
            Discount::NodeRate(&rates.levels()[n - t_forward..]),
            NodeRule::European,
        );

        let mut levels = with_coupons.levels().to_vec();
        levels.extend_from_slice(&coupon_free.levels()[1..]);
        let lattice = Lattice::from_levels(levels, LevelOrder::TerminalToRoot);

        let delivery_discount = term_structure.zero_price(r0, t_forward)? / 100.0;
        let fair_price = lattice.root_value() / delivery_discount;
        Ok(BondForwardValue {
            fair_price,
            lattice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fair_price_matches_reference() {
        let value = BondForwardEngine::new(1.25, 0.9, 10.0)
            .value(6.0, 2, 4)
            .unwrap();
        assert_abs_diff_eq!(value.fair_price, 105.188531847263, epsilon = 1e-8);
        assert_abs_diff_eq!(value.lattice.root_value(), 93.23073733312194, epsilon = 1e-8);
    }

    #[test]
    fn lattice_spans_the_full_bond_horizon() {
        let value = BondForwardEngine::new(1.25, 0.9, 10.0)
            .value(6.0, 2, 4)
            .unwrap();
        assert_eq!(value.lattice.num_levels(), 5);
        assert_eq!(value.lattice.level(0).len(), 5);
        assert_eq!(value.lattice.level(4).len(), 1);
    }

    #[test]
    fn zero_coupon_forward_equals_zcb_ratio() {
        // With no coupons the forward price is Z(n)/Z(T) · 100.
        let value = BondForwardEngine::new(1.25, 0.9, 0.0)
            .value(6.0, 2, 4)
            .unwrap();
        let engine = TermStructureEngine::new(1.25, 0.9);
        let z_n = engine.zero_price(6.0, 4).unwrap();
        let z_t = engine.zero_price(6.0, 2).unwrap();
        assert_abs_diff_eq!(value.fair_price, z_n / (z_t / 100.0), epsilon = 1e-9);
    }

    #[test]
    fn delivery_at_or_after_maturity_rejected() {
        let engine = BondForwardEngine::new(1.25, 0.9, 10.0);
        assert!(engine.value(6.0, 4, 4).is_err());
        assert!(engine.value(6.0, 0, 4).is_err());
    }
}
