//! Swaptions: European options to enter an interest-rate swap.

use bt_core::{ensure, Rate, Real, Result, Size};
use bt_instruments::SwapType;
use bt_lattice::{induct_backward, short_rate_lattice, Discount, Lattice, NodeRule};

use crate::swap_engine::SwapEngine;

/// Values a European option, exercisable at step `t_exercise`, to enter
/// an interest-rate swap running to step `n`.
///
/// The underlying swap lattice is valued first; at the exercise step its
/// values are clipped call-style against the option strike (usually 0 —
/// the holder enters the swap only when it has positive value), then
/// discounted to the root with the node-local short rate.
#[derive(Debug, Clone)]
pub struct SwaptionEngine {
    /// Side of the underlying swap received on exercise.
    pub swap_type: SwapType,
    /// Fixed rate of the underlying swap, in percent.
    pub swap_rate: Rate,
    /// Option strike on the swap value, in percent of notional.
    pub strike: Rate,
    /// Up-move multiplier of the short-rate model.
    pub u: Real,
    /// Down-move multiplier of the short-rate model.
    pub d: Real,
}

impl SwaptionEngine {
    /// Create an engine from the swap terms, option strike, and rate model.
    pub fn new(swap_type: SwapType, swap_rate: Rate, strike: Rate, u: Real, d: Real) -> Self {
        Self {
            swap_type,
            swap_rate,
            strike,
            u,
            d,
        }
    }

    /// The swaption value lattice over `t_exercise + 1` levels,
    /// terminal-to-root. `r0` is today's short rate in percent.
    /// Requires `1 ≤ t_exercise < n`.
    pub fn value_lattice(&self, r0: Rate, n: Size, t_exercise: Size) -> Result<Lattice> {
        ensure!(
            t_exercise >= 1,
            "exercise must be at least one period out"
        );
        ensure!(
            t_exercise < n,
            "exercise step ({t_exercise}) must precede the swap's final payment ({n})"
        );

        let swap = SwapEngine::new(self.swap_type, self.swap_rate, self.u, self.d)
            .value_lattice(r0, n)?;
        // Swap levels are terminal-first; the exercise step sits at
        // storage index n − 1 − t_exercise.
        let at_exercise: Vec<Real> = swap
            .level(n - 1 - t_exercise)
            .iter()
            .map(|&v| (v - 0.01 * self.strike).max(0.0))
            .collect();

        let rates = short_rate_lattice(r0, t_exercise - 1, self.u, self.d).reversed();
        Ok(induct_backward(
            at_exercise,
            t_exercise,
            0.5,
            Discount::NodeRate(rates.levels()),
            NodeRule::European,
        ))
    }

    /// The swaption value today.
    pub fn value(&self, r0: Rate, n: Size, t_exercise: Size) -> Result<Real> {
        Ok(self.value_lattice(r0, n, t_exercise)?.root_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn payer_swaption_matches_reference() {
        let value = SwaptionEngine::new(SwapType::Payer, 5.0, 0.0, 1.25, 0.9)
            .value(6.0, 6, 3)
            .unwrap();
        assert_abs_diff_eq!(value, 0.06197180915914936, epsilon = 1e-12);
    }

    #[test]
    fn swaption_value_decreases_with_strike() {
        let engine = |strike: f64| SwaptionEngine::new(SwapType::Payer, 5.0, strike, 1.25, 0.9);
        let at_zero = engine(0.0).value(6.0, 6, 3).unwrap();
        let at_two = engine(2.0).value(6.0, 6, 3).unwrap();
        assert!(at_zero >= 0.0);
        assert!(at_two <= at_zero);
    }

    #[test]
    fn exercise_after_final_payment_rejected() {
        let engine = SwaptionEngine::new(SwapType::Payer, 5.0, 0.0, 1.25, 0.9);
        assert!(engine.value(6.0, 6, 6).is_err());
        assert!(engine.value(6.0, 6, 0).is_err());
    }
}
