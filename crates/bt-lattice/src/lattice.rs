//! The recombining lattice container.
//!
//! A [`Lattice`] is an ordered sequence of *levels* of node values.
//! Forward-built lattices (prices, short rates, state prices) store level
//! `t` at index `t` with `t + 1` nodes, ordered from all-up-moves
//! (index 0) to all-down-moves (index `t`). Backward-induced lattices
//! store the contraction output terminal-first; the [`LevelOrder`] tag
//! records which convention a given lattice uses so that presentation can
//! relabel rows with their true time index.
//!
//! Lattices are never mutated after construction: every valuation builds
//! its own lattices from scalar inputs and discards them when done.

use bt_core::{Real, Size};

/// Storage order of the levels of a [`Lattice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelOrder {
    /// Level 0 is the root (time 0); the last level is maturity.
    RootToTerminal,
    /// Level 0 is the terminal (maturity) level; the last level is the root.
    TerminalToRoot,
}

/// A recombining binomial lattice of node values.
///
/// Node `(t, i)` of a forward-built lattice is the state reached by
/// `i` down-moves and `t − i` up-moves from the root, independent of the
/// order of the moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    levels: Vec<Vec<Real>>,
    order: LevelOrder,
}

impl Lattice {
    /// Build a lattice from pre-computed levels.
    ///
    /// # Panics
    /// Panics if `levels` is empty; every lattice has at least a root.
    pub fn from_levels(levels: Vec<Vec<Real>>, order: LevelOrder) -> Self {
        assert!(!levels.is_empty(), "a lattice has at least one level");
        Self { levels, order }
    }

    /// A single-level lattice containing only the root value.
    pub fn single(root: Real) -> Self {
        Self {
            levels: vec![vec![root]],
            order: LevelOrder::RootToTerminal,
        }
    }

    /// The storage order of the levels.
    pub fn order(&self) -> LevelOrder {
        self.order
    }

    /// Number of levels.
    pub fn num_levels(&self) -> Size {
        self.levels.len()
    }

    /// The level at storage index `idx`.
    pub fn level(&self, idx: Size) -> &[Real] {
        &self.levels[idx]
    }

    /// All levels in storage order.
    pub fn levels(&self) -> &[Vec<Real>] {
        &self.levels
    }

    /// The true time index of the level stored at `idx`.
    ///
    /// Terminal-first lattices are relabeled so that the last stored level
    /// (the root) is time 0.
    pub fn time_index(&self, idx: Size) -> Size {
        match self.order {
            LevelOrder::RootToTerminal => idx,
            LevelOrder::TerminalToRoot => self.levels.len() - 1 - idx,
        }
    }

    /// The single value at the root (time 0) of the lattice.
    ///
    /// Engines only construct lattices whose root level has one node.
    pub fn root_value(&self) -> Real {
        let root = match self.order {
            LevelOrder::RootToTerminal => self.levels.first(),
            LevelOrder::TerminalToRoot => self.levels.last(),
        };
        root.expect("a lattice has at least one level")[0]
    }

    /// The terminal (maturity) level.
    pub fn terminal_level(&self) -> &[Real] {
        match self.order {
            LevelOrder::RootToTerminal => self.levels.last(),
            LevelOrder::TerminalToRoot => self.levels.first(),
        }
        .expect("a lattice has at least one level")
    }

    /// A copy of this lattice with levels stored in the opposite order.
    pub fn reversed(&self) -> Self {
        let mut levels = self.levels.clone();
        levels.reverse();
        Self {
            levels,
            order: match self.order {
                LevelOrder::RootToTerminal => LevelOrder::TerminalToRoot,
                LevelOrder::TerminalToRoot => LevelOrder::RootToTerminal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_level_lattice() {
        let l = Lattice::single(100.0);
        assert_eq!(l.num_levels(), 1);
        assert_eq!(l.root_value(), 100.0);
        assert_eq!(l.terminal_level(), &[100.0]);
        assert_eq!(l.order(), LevelOrder::RootToTerminal);
    }

    #[test]
    fn reversed_flips_order_and_time_labels() {
        let l = Lattice::from_levels(
            vec![vec![1.0], vec![2.0, 3.0], vec![4.0, 5.0, 6.0]],
            LevelOrder::RootToTerminal,
        );
        assert_eq!(l.time_index(0), 0);
        assert_eq!(l.time_index(2), 2);

        let r = l.reversed();
        assert_eq!(r.order(), LevelOrder::TerminalToRoot);
        assert_eq!(r.level(0), &[4.0, 5.0, 6.0]);
        assert_eq!(r.time_index(0), 2);
        assert_eq!(r.time_index(2), 0);
        assert_eq!(r.root_value(), 1.0);
        assert_eq!(r.terminal_level(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "at least one level")]
    fn empty_lattice_rejected() {
        let _ = Lattice::from_levels(vec![], LevelOrder::RootToTerminal);
    }
}
