//! The risk-neutral branch probability.

use bt_core::{ensure, Real, Result};

/// Compute the per-step risk-neutral up-move probability
/// `q = (R − d − c) / (u − d)`.
///
/// `growth` is the per-period risk-free growth factor `R = 1 + r`;
/// `c` is the additive payout term applied to both multipliers.
/// The probability is constant across the lattice because `u`, `d`, `c`
/// and `R` are period-invariant in this model.
///
/// # Errors
/// * `u = d` leaves the probability undefined.
/// * A violation of the no-arbitrage band `d + c < R < u + c` would put
///   `q` outside `(0, 1)` and make every downstream value financially
///   meaningless, so it is rejected here rather than propagated silently.
pub fn risk_neutral_probability(growth: Real, u: Real, d: Real, c: Real) -> Result<Real> {
    ensure!(
        (u - d).abs() > Real::EPSILON,
        "degenerate multipliers: u ({u}) must differ from d ({d})"
    );
    ensure!(
        d + c < growth && growth < u + c,
        "no-arbitrage bounds violated: need d + c < R < u + c, got {} < {growth} < {}",
        d + c,
        u + c
    );
    Ok((growth - d - c) / (u - d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn standard_parameters() {
        // R = 1.1, u = 1.2, d = 0.8 → q = 0.75
        let q = risk_neutral_probability(1.1, 1.2, 0.8, 0.0).unwrap();
        assert_abs_diff_eq!(q, 0.75, epsilon = 1e-15);
    }

    #[test]
    fn payout_shifts_the_band() {
        // c = 0.05: q = (1.1 − 0.8 − 0.05) / 0.4 = 0.625
        let q = risk_neutral_probability(1.1, 1.2, 0.8, 0.05).unwrap();
        assert_abs_diff_eq!(q, 0.625, epsilon = 1e-15);
    }

    #[test]
    fn degenerate_multipliers_rejected() {
        assert!(risk_neutral_probability(1.05, 1.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn arbitrage_violation_rejected() {
        // R above u: sure profit from borrowing the stock
        assert!(risk_neutral_probability(1.3, 1.2, 0.8, 0.0).is_err());
        // R below d: sure profit from holding the stock
        assert!(risk_neutral_probability(0.7, 1.2, 0.8, 0.0).is_err());
    }
}
