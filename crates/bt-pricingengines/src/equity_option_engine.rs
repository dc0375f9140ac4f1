//! European and American options on a lattice-valued security.

use bt_core::{Real, Result};
use bt_instruments::{ExerciseType, OptionType, Payoff, PlainVanillaPayoff};
use bt_lattice::{
    induct_backward, risk_neutral_probability, Discount, Lattice, LevelOrder, NodeRule,
};

/// Values a vanilla option on an already-built underlying lattice.
///
/// The underlying is taken as a parameter rather than rebuilt so that the
/// same engine prices options on a security, a futures lattice, or any
/// other lattice sharing the model's multipliers. Discounting uses the
/// constant growth factor; the short rate is deterministic on this side
/// of the library.
#[derive(Debug, Clone)]
pub struct EquityOptionEngine {
    /// Strike and call/put flavour.
    pub payoff: PlainVanillaPayoff,
    /// European or American exercise.
    pub exercise: ExerciseType,
    /// Up-move multiplier of the underlying model.
    pub u: Real,
    /// Down-move multiplier of the underlying model.
    pub d: Real,
    /// Additive payout (dividend) term of the underlying model.
    pub c: Real,
    /// Per-period risk-free growth factor `R = 1 + r`.
    pub growth: Real,
}

impl EquityOptionEngine {
    /// Create an engine from the payoff, exercise style, and model.
    pub fn new(
        payoff: PlainVanillaPayoff,
        exercise: ExerciseType,
        u: Real,
        d: Real,
        c: Real,
        growth: Real,
    ) -> Self {
        Self {
            payoff,
            exercise,
            u,
            d,
            c,
            growth,
        }
    }

    /// The option value lattice, terminal-to-root.
    ///
    /// The maturity is the underlying's terminal step; a root-to-terminal
    /// underlying is reversed internally.
    pub fn value_lattice(&self, underlying: &Lattice) -> Result<Lattice> {
        let q = risk_neutral_probability(self.growth, self.u, self.d, self.c)?;
        let und = match underlying.order() {
            LevelOrder::RootToTerminal => underlying.reversed(),
            LevelOrder::TerminalToRoot => underlying.clone(),
        };
        let steps = und.num_levels() - 1;
        let terminal: Vec<Real> = und.level(0).iter().map(|&s| self.payoff.value(s)).collect();

        let intrinsic = |s: Real| self.payoff.value(s);
        // Early exercise only ever binds for the put: exercising a call on
        // a non-payout underlying forfeits time value.
        let rule = match (self.exercise, self.payoff.option_type) {
            (ExerciseType::American, OptionType::Put) => NodeRule::EarlyExercise {
                intrinsic: &intrinsic,
                comparison: &und.levels()[1..],
            },
            _ => NodeRule::European,
        };
        Ok(induct_backward(
            terminal,
            steps,
            q,
            Discount::Growth(self.growth),
            rule,
        ))
    }

    /// The option value today.
    pub fn value(&self, underlying: &Lattice) -> Result<Real> {
        Ok(self.value_lattice(underlying)?.root_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bt_lattice::price_lattice;

    fn engine(option_type: OptionType, exercise: ExerciseType) -> EquityOptionEngine {
        EquityOptionEngine::new(
            PlainVanillaPayoff::new(option_type, 100.0),
            exercise,
            1.2,
            0.8,
            0.0,
            1.1,
        )
    }

    fn underlying() -> Lattice {
        price_lattice(100.0, 3, 1.2, 0.8, 0.0)
    }

    #[test]
    fn european_call_value() {
        let value = engine(OptionType::Call, ExerciseType::European)
            .value(&underlying())
            .unwrap();
        assert_abs_diff_eq!(value, 27.89256198347109, epsilon = 1e-10);
    }

    #[test]
    fn european_put_value() {
        let value = engine(OptionType::Put, ExerciseType::European)
            .value(&underlying())
            .unwrap();
        assert_abs_diff_eq!(value, 3.024042073628841, epsilon = 1e-10);
    }

    #[test]
    fn american_put_value() {
        let value = engine(OptionType::Put, ExerciseType::American)
            .value(&underlying())
            .unwrap();
        assert_abs_diff_eq!(value, 5.362509391435002, epsilon = 1e-10);
    }

    #[test]
    fn american_call_equals_european_call() {
        let und = underlying();
        let eu = engine(OptionType::Call, ExerciseType::European)
            .value(&und)
            .unwrap();
        let am = engine(OptionType::Call, ExerciseType::American)
            .value(&und)
            .unwrap();
        assert_abs_diff_eq!(am, eu, epsilon = 1e-12);
    }

    #[test]
    fn terminal_first_underlying_accepted() {
        let und = underlying();
        let root_first = engine(OptionType::Call, ExerciseType::European)
            .value(&und)
            .unwrap();
        let terminal_first = engine(OptionType::Call, ExerciseType::European)
            .value(&und.reversed())
            .unwrap();
        assert_abs_diff_eq!(root_first, terminal_first, epsilon = 1e-15);
    }
}
