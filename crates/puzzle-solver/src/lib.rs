//! Uninformed state-space search for finite-state puzzles.
//!
//! Any type implementing [`Puzzle`] can be handed to the depth-first or
//! breadth-first solver. Both return a [`SolutionTree`] chain from the
//! initial state to a solved state, or `None` when no solved state is
//! reachable.

pub mod definition;
pub mod error;
pub mod node;
pub mod puzzle;
pub mod solver;
pub mod variants;

// Re-export main types
pub use definition::{AnyPuzzle, PuzzleDefinition, PuzzleKind};
pub use error::PuzzleError;
pub use node::{NodeId, SolutionNode, SolutionTree};
pub use puzzle::Puzzle;
pub use solver::{
    breadth_first_search, breadth_first_solve, depth_first_search, depth_first_solve, solve,
    SearchStrategy, SolverConfig, SolverResult,
};
pub use variants::{PegSolitaire, SlidingTile, WordLadder};
