//! The capability contract every puzzle variant implements.
//!
//! The solvers in [`crate::solver`] only ever talk to this trait. A variant
//! describes one immutable configuration; moves never mutate a state, they
//! produce new ones.

use std::fmt::Display;
use std::hash::Hash;

/// A single configuration of a finite-state puzzle.
///
/// Equality is structural: two values are equal iff they describe the same
/// configuration, and equal values must hash equally. `Display` is the
/// human-readable form used when a solution is rendered.
pub trait Puzzle: Clone + Eq + Hash + Display {
    /// All states reachable from this one by exactly one legal move.
    ///
    /// May be empty. Order does not affect correctness, only which solution
    /// depth-first search happens to find first.
    fn extensions(&self) -> Vec<Self>;

    /// Whether this state is a goal state.
    fn is_solved(&self) -> bool;

    /// Pruning oracle: `true` only if no sequence of extensions from this
    /// state can ever reach a solved state.
    ///
    /// Implementations must be sound. Returning `true` for a state that can
    /// still be solved makes the depth-first solver report a solvable puzzle
    /// as unsolvable. Returning `false` for a dead state is always allowed.
    fn fail_fast(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    /// Counts down to zero; one move subtracts one.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Countdown(u32);

    impl fmt::Display for Countdown {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Puzzle for Countdown {
        fn extensions(&self) -> Vec<Self> {
            if self.0 == 0 {
                Vec::new()
            } else {
                vec![Countdown(self.0 - 1)]
            }
        }

        fn is_solved(&self) -> bool {
            self.0 == 0
        }
    }

    #[test]
    fn test_fail_fast_defaults_to_false() {
        assert!(!Countdown(3).fail_fast());
        assert!(!Countdown(0).fail_fast());
    }

    #[test]
    fn test_extensions_produce_new_values() {
        let start = Countdown(2);
        let next = start.extensions();
        assert_eq!(next, vec![Countdown(1)]);
        assert_eq!(start, Countdown(2));
        assert!(Countdown(0).extensions().is_empty());
    }
}
