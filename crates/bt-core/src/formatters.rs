//! Numeric formatting helpers.
//!
//! Small, allocation-returning helpers shared by the lattice formatter and
//! by callers printing scalar results (spot rates, forward fair prices).

use crate::{Rate, Real};

/// Format a real number with the given number of decimal places.
pub fn format_real(value: Real, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format a decimal-fraction rate as a percentage string.
///
/// ```
/// use bt_core::formatters::format_rate;
///
/// // A solved spot rate, as returned by the term-structure engines.
/// assert_eq!(format_rate(0.06676983800314407), "6.6770 %");
/// ```
pub fn format_rate(r: Rate) -> String {
    format!("{:.4} %", r * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_real_fixed_decimals() {
        assert_eq!(format_real(143.99951, 4), "143.9995");
        assert_eq!(format_real(100.0, 2), "100.00");
    }

    #[test]
    fn format_rate_percent() {
        assert_eq!(format_rate(0.05), "5.0000 %");
    }
}
