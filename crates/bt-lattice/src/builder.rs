//! Forward recombining lattice builders.
//!
//! Both builders share the same recombination rule: level `t` is formed
//! from level `t − 1` by taking the up-child of the all-up node followed
//! by the down-child of every node. Because the multipliers are constant
//! across the tree, the up-child of a down-move coincides with the
//! down-child of an up-move, so this produces exactly the `t + 1`
//! distinct nodes of the recombining tree.

use bt_core::{Rate, Real, Size};

use crate::lattice::{Lattice, LevelOrder};

/// Build the recombining lattice of a security price.
///
/// Node `(t, i)` equals `s0 · (u+c)^(t−i) · (d+c)^i`; level `t` is ordered
/// from all up-moves (index 0) to all down-moves (index `t`). The payout
/// term `c` (dividend yield, as a decimal) shifts both multipliers
/// additively. `n = 0` yields a single-level lattice holding the root.
pub fn price_lattice(s0: Real, n: Size, u: Real, d: Real, c: Real) -> Lattice {
    build_recombining(s0, n, u + c, d + c)
}

/// Build the recombining lattice of the short rate.
///
/// Same recombination rule as [`price_lattice`] with no payout term.
/// `r0` and every node are quoted in percent (6.0 = 6 %).
pub fn short_rate_lattice(r0: Rate, n: Size, u: Real, d: Real) -> Lattice {
    build_recombining(r0, n, u, d)
}

fn build_recombining(root: Real, n: Size, up: Real, down: Real) -> Lattice {
    let mut levels = Vec::with_capacity(n + 1);
    levels.push(vec![root]);
    for t in 1..=n {
        let prev = &levels[t - 1];
        let mut level = Vec::with_capacity(t + 1);
        level.push(up * prev[0]);
        level.extend(prev.iter().map(|&v| down * v));
        levels.push(level);
    }
    Lattice::from_levels(levels, LevelOrder::RootToTerminal)
}
