//! Options on a zero-coupon bond.

use bt_core::{ensure, Rate, Real, Result, Size};
use bt_instruments::{ExerciseType, OptionType, Payoff, PlainVanillaPayoff};
use bt_lattice::{induct_backward, short_rate_lattice, Discount, Lattice, NodeRule};

use crate::term_structure_engine::TermStructureEngine;

/// Values a European or American option on a zero-coupon bond.
///
/// The option matures at step `t_option ≤ n`, where `n` is the bond's
/// maturity. Intrinsic value is taken against the bond-price lattice at
/// the option maturity; induction then discounts with the node-local
/// short rate over the option's horizon only.
#[derive(Debug, Clone)]
pub struct BondOptionEngine {
    /// Strike and call/put flavour (strike in bond price per 100 face).
    pub payoff: PlainVanillaPayoff,
    /// European or American exercise.
    pub exercise: ExerciseType,
    /// Up-move multiplier of the short-rate model.
    pub u: Real,
    /// Down-move multiplier of the short-rate model.
    pub d: Real,
}

impl BondOptionEngine {
    /// Create an engine from the payoff, exercise style, and rate model.
    pub fn new(payoff: PlainVanillaPayoff, exercise: ExerciseType, u: Real, d: Real) -> Self {
        Self {
            payoff,
            exercise,
            u,
            d,
        }
    }

    /// The option value lattice over `t_option + 1` levels,
    /// terminal-to-root. `r0` is today's short rate in percent.
    pub fn value_lattice(&self, r0: Rate, n: Size, t_option: Size) -> Result<Lattice> {
        ensure!(
            t_option <= n,
            "option maturity ({t_option}) exceeds bond maturity ({n})"
        );
        ensure!(n >= 1, "bond maturity must be at least one period");

        let srl = short_rate_lattice(r0, n, self.u, self.d);
        // Rates over the option horizon only, terminal-first.
        let horizon_rates: Vec<Vec<Real>> = (0..=t_option)
            .rev()
            .map(|t| srl.level(t).to_vec())
            .collect();
        let bond = TermStructureEngine::new(self.u, self.d)
            .zero_curve(r0, n)?
            .prices;

        // Bond prices at the option maturity sit `n − t_option` levels
        // into the terminal-first bond lattice.
        let at_expiry = bond.level(n - t_option);
        let terminal: Vec<Real> = at_expiry.iter().map(|&z| self.payoff.value(z)).collect();

        let intrinsic = |z: Real| self.payoff.value(z);
        let rule = match (self.exercise, self.payoff.option_type) {
            (ExerciseType::American, OptionType::Put) => NodeRule::EarlyExercise {
                intrinsic: &intrinsic,
                comparison: &bond.levels()[n - t_option + 1..],
            },
            _ => NodeRule::European,
        };
        Ok(induct_backward(
            terminal,
            t_option,
            0.5,
            Discount::NodeRate(&horizon_rates[1..]),
            rule,
        ))
    }

    /// The option value today.
    pub fn value(&self, r0: Rate, n: Size, t_option: Size) -> Result<Real> {
        Ok(self.value_lattice(r0, n, t_option)?.root_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn european_call_matches_reference() {
        let engine = BondOptionEngine::new(
            PlainVanillaPayoff::new(OptionType::Call, 88.0),
            ExerciseType::European,
            1.25,
            0.9,
        );
        let value = engine.value(6.0, 4, 2).unwrap();
        assert_abs_diff_eq!(value, 0.5898893070964252, epsilon = 1e-10);
    }

    #[test]
    fn deep_american_put_exercised_immediately() {
        // Strike far above the root bond price: intrinsic at the root wins.
        let engine = BondOptionEngine::new(
            PlainVanillaPayoff::new(OptionType::Put, 88.0),
            ExerciseType::American,
            1.25,
            0.9,
        );
        let value = engine.value(6.0, 4, 2).unwrap();
        assert_abs_diff_eq!(value, 10.782259671283995, epsilon = 1e-9);
    }

    #[test]
    fn option_maturity_beyond_bond_rejected() {
        let engine = BondOptionEngine::new(
            PlainVanillaPayoff::new(OptionType::Call, 88.0),
            ExerciseType::European,
            1.25,
            0.9,
        );
        assert!(engine.value(6.0, 4, 5).is_err());
    }
}
