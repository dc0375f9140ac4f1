//! Text rendering of lattices.
//!
//! Valuation never prints: engines return structured lattices, and this
//! formatter produces the display string on request. Rows are labeled by
//! their true time index, which for terminal-first lattices means the
//! stored order is relabeled rather than reordered.

use bt_core::formatters::format_real;

use crate::lattice::Lattice;

/// Render a lattice as one row per level, labeled with the true time
/// index, values fixed to `decimals` fractional digits.
///
/// ```
/// use bt_lattice::{format_lattice, price_lattice};
///
/// let tree = price_lattice(100.0, 2, 1.2, 0.8, 0.0);
/// let text = format_lattice(&tree, 4);
/// assert!(text.contains("(02) [144.0000, 96.0000, 64.0000]"));
/// ```
pub fn format_lattice(lattice: &Lattice, decimals: usize) -> String {
    let mut out = String::from(" t   Binomial tree nodes\n");
    for idx in 0..lattice.num_levels() {
        let row = lattice
            .level(idx)
            .iter()
            .map(|&v| format_real(v, decimals))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("({:02}) [{row}]\n", lattice.time_index(idx)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::price_lattice;

    #[test]
    fn root_first_labels_ascend() {
        let text = format_lattice(&price_lattice(100.0, 2, 1.2, 0.8, 0.0), 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "(00) [100.00]");
        assert_eq!(lines[2], "(01) [120.00, 80.00]");
        assert_eq!(lines[3], "(02) [144.00, 96.00, 64.00]");
    }

    #[test]
    fn terminal_first_labels_descend() {
        let text = format_lattice(&price_lattice(100.0, 2, 1.2, 0.8, 0.0).reversed(), 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "(02) [144.00, 96.00, 64.00]");
        assert_eq!(lines[3], "(00) [100.00]");
    }
}
