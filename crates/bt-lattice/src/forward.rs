//! Forward induction of elementary (Arrow-Debreu) state prices.

use bt_core::{ensure, Real, Result, Size};

use crate::lattice::{Lattice, LevelOrder};

/// Accumulate the lattice of elementary state prices over `n` periods.
///
/// Node `(t, i)` holds the price today of a security paying one unit if
/// and only if that node is reached. The root is fixed at 1; each node
/// collects the contributions of its one or two parents, discounted by
/// the parent's short rate. Up and down moves of the short rate are
/// equally likely under the risk-neutral measure in this model, so the
/// branch probability is fixed at ½ rather than derived from the
/// multipliers.
///
/// `rates` must be a root-to-terminal short-rate lattice (percent quotes)
/// covering at least `n` levels. The result is root-to-terminal.
///
/// This lattice is a general-purpose primitive: the price of any
/// path-independent payoff at time `t` is the sum of payoff × state price
/// over level `t`.
pub fn elementary_prices(rates: &Lattice, n: Size) -> Result<Lattice> {
    ensure!(
        rates.order() == LevelOrder::RootToTerminal,
        "state prices accumulate forward; the rate lattice must be root-to-terminal"
    );
    ensure!(
        rates.num_levels() >= n,
        "rate lattice covers {} levels, need {n}",
        rates.num_levels()
    );

    let mut levels = Vec::with_capacity(n + 1);
    levels.push(vec![1.0]);
    for t in 1..=n {
        let prev = &levels[t - 1];
        let r = rates.level(t - 1);
        let disc = |i: Size| 1.0 + 0.01 * r[i];
        let mut level: Vec<Real> = Vec::with_capacity(t + 1);
        // Boundary nodes have a single parent.
        level.push(0.5 * prev[0] / disc(0));
        for i in 1..t {
            level.push(0.5 * prev[i - 1] / disc(i - 1) + 0.5 * prev[i] / disc(i));
        }
        level.push(0.5 * prev[t - 1] / disc(t - 1));
        levels.push(level);
    }
    Ok(Lattice::from_levels(levels, LevelOrder::RootToTerminal))
}
