//! The backward-induction engine.
//!
//! A single contraction loop serves every backward-valued instrument:
//! starting from a terminal (or boundary) level of size `N`, each step
//! produces a level of size `N − 1` whose node `i` is the risk-neutral
//! expectation of nodes `i` and `i + 1` of the finer level, divided by the
//! per-node discount and adjusted by the instrument's override rule.
//! Instruments differ only in the [`Discount`] and [`NodeRule`] variants
//! they select.

use bt_core::{DiscountFactor, Real, Size};

use crate::lattice::{Lattice, LevelOrder};

/// Discount source applied at each contraction step.
///
/// The variants form a closed set: futures-style contraction discounts
/// nothing, equity instruments divide by a constant growth factor, and
/// fixed-income instruments divide by the node-local short rate.
#[derive(Clone, Copy)]
pub enum Discount<'a> {
    /// No discounting. Futures carry no initial cost, so their fair price
    /// is a pure expectation.
    None,
    /// Divide by a constant per-period growth factor `R = 1 + r`.
    Growth(Real),
    /// Divide by `1 + rate/100` using a node-local short rate quoted in
    /// percent. The caller supplies the rate levels already aligned so
    /// that contraction step `s`, node `i` reads `levels[s][i]`.
    NodeRate(&'a [Vec<Real>]),
}

impl Discount<'_> {
    fn divisor(&self, step: Size, node: Size) -> DiscountFactor {
        match self {
            Discount::None => 1.0,
            Discount::Growth(r) => *r,
            Discount::NodeRate(levels) => 1.0 + 0.01 * levels[step][node],
        }
    }
}

/// When an [`NodeRule::Accrual`] cash flow enters the node value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AccrualTiming {
    /// The flow accrues with the continuation value and is discounted
    /// with it (floating swap legs: the flow fixes at the node but pays a
    /// period later).
    BeforeDiscount,
    /// The flow is received at the node itself and added undiscounted
    /// (bond coupons during a forward's accrual phase).
    AfterDiscount,
}

/// Per-node override applied after the raw continuation value is known.
///
/// A closed set of variants dispatched once per node, rather than
/// conditional branches scattered across the instrument engines.
#[derive(Clone, Copy)]
pub enum NodeRule<'a> {
    /// Accept the continuation value unchanged.
    European,
    /// Early exercise: floor the continuation value at the intrinsic
    /// value of the comparison state. `comparison` holds the underlying's
    /// levels aligned like [`Discount::NodeRate`] (step `s`, node `i`).
    EarlyExercise {
        /// Intrinsic value as a function of the comparison state.
        intrinsic: &'a dyn Fn(Real) -> Real,
        /// Underlying levels, one per contraction step.
        comparison: &'a [Vec<Real>],
    },
    /// Re-add a per-node cash flow, indexed `(step, node)` like
    /// [`Discount::NodeRate`] levels.
    Accrual {
        /// The cash flow received at (or fixed at) the node.
        cash_flow: &'a dyn Fn(Size, Size) -> Real,
        /// Whether the flow is discounted with the continuation value.
        timing: AccrualTiming,
    },
}

/// Propagate a terminal level back to the root by repeated contraction.
///
/// Performs `steps` contractions; the terminal level must therefore hold
/// at least `steps + 1` nodes. `q` is the probability of the up branch
/// (node `i` of the finer level; the down branch is node `i + 1`).
/// The result stores levels terminal-first ([`LevelOrder::TerminalToRoot`]);
/// callers wanting root-first order reverse it.
pub fn induct_backward(
    terminal: Vec<Real>,
    steps: Size,
    q: Real,
    discount: Discount<'_>,
    rule: NodeRule<'_>,
) -> Lattice {
    debug_assert!(terminal.len() > steps, "terminal level too small");
    let mut levels = Vec::with_capacity(steps + 1);
    levels.push(terminal);
    for s in 0..steps {
        let prev = &levels[s];
        let mut next = Vec::with_capacity(prev.len() - 1);
        for i in 0..prev.len() - 1 {
            let mut expected = q * prev[i] + (1.0 - q) * prev[i + 1];
            if let NodeRule::Accrual {
                cash_flow,
                timing: AccrualTiming::BeforeDiscount,
            } = rule
            {
                expected += cash_flow(s, i);
            }
            let mut value = expected / discount.divisor(s, i);
            match rule {
                NodeRule::European => {}
                NodeRule::EarlyExercise {
                    intrinsic,
                    comparison,
                } => value = value.max(intrinsic(comparison[s][i])),
                NodeRule::Accrual {
                    cash_flow,
                    timing: AccrualTiming::AfterDiscount,
                } => value += cash_flow(s, i),
                NodeRule::Accrual { .. } => {}
            }
            next.push(value);
        }
        levels.push(next);
    }
    Lattice::from_levels(levels, LevelOrder::TerminalToRoot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn undiscounted_contraction() {
        let l = induct_backward(vec![4.0, 2.0, 0.0], 2, 0.5, Discount::None, NodeRule::European);
        assert_eq!(l.order(), LevelOrder::TerminalToRoot);
        assert_eq!(l.level(1), &[3.0, 1.0]);
        assert_eq!(l.level(2), &[2.0]);
        assert_eq!(l.root_value(), 2.0);
    }

    #[test]
    fn constant_growth_discounting() {
        let l = induct_backward(
            vec![4.0, 0.0],
            1,
            0.75,
            Discount::Growth(1.25),
            NodeRule::European,
        );
        // (0.75·4 + 0.25·0) / 1.25 = 2.4
        assert_abs_diff_eq!(l.root_value(), 2.4, epsilon = 1e-15);
    }

    #[test]
    fn node_local_rate_discounting() {
        let rates = vec![vec![25.0, 0.0]];
        let l = induct_backward(
            vec![100.0, 100.0, 100.0],
            1,
            0.5,
            Discount::NodeRate(&rates),
            NodeRule::European,
        );
        assert_abs_diff_eq!(l.level(1)[0], 80.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.level(1)[1], 100.0, epsilon = 1e-12);
    }

    #[test]
    fn early_exercise_floors_continuation() {
        let comparison = vec![vec![60.0, 110.0]];
        let intrinsic = |s: f64| (100.0 - s).max(0.0);
        let l = induct_backward(
            vec![10.0, 10.0, 10.0],
            1,
            0.5,
            Discount::Growth(1.0),
            NodeRule::EarlyExercise {
                intrinsic: &intrinsic,
                comparison: &comparison,
            },
        );
        // First node: intrinsic 40 beats continuation 10; second: held.
        assert_eq!(l.level(1), &[40.0, 10.0]);
    }

    #[test]
    fn accrual_timing_changes_the_discounted_amount() {
        let cf = |_s: Size, _i: Size| 2.0;
        let before = induct_backward(
            vec![10.0, 10.0],
            1,
            0.5,
            Discount::Growth(1.25),
            NodeRule::Accrual {
                cash_flow: &cf,
                timing: AccrualTiming::BeforeDiscount,
            },
        );
        let after = induct_backward(
            vec![10.0, 10.0],
            1,
            0.5,
            Discount::Growth(1.25),
            NodeRule::Accrual {
                cash_flow: &cf,
                timing: AccrualTiming::AfterDiscount,
            },
        );
        assert_abs_diff_eq!(before.root_value(), 12.0 / 1.25, epsilon = 1e-15);
        assert_abs_diff_eq!(after.root_value(), 10.0 / 1.25 + 2.0, epsilon = 1e-15);
    }
}
