//! Uninformed depth-first and breadth-first solvers.
//!
//! Both searches run against the [`Puzzle`] trait only and return a linear
//! [`SolutionTree`] from the initial state to a solved state. Neither uses
//! the call stack for recursion: depth-first keeps an explicit stack of
//! frames, breadth-first a FIFO of indices into its discovery list.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::node::SolutionTree;
use crate::puzzle::Puzzle;

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Maximum time to search; unbounded when `None`
    pub timeout: Option<Duration>,
    /// Maximum number of states to expand; unbounded when `None`
    pub max_states: Option<usize>,
}

/// Which search to run
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
pub enum SearchStrategy {
    /// First solution found, not necessarily shortest
    #[serde(rename = "dfs", alias = "depth_first")]
    #[value(name = "dfs", alias = "depth-first")]
    DepthFirst,
    /// Minimum number of moves
    #[default]
    #[serde(rename = "bfs", alias = "breadth_first")]
    #[value(name = "bfs", alias = "breadth-first")]
    BreadthFirst,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::DepthFirst => f.write_str("depth-first"),
            SearchStrategy::BreadthFirst => f.write_str("breadth-first"),
        }
    }
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SolverResult<P> {
    /// Chain from the initial state to a solved state, if one was found
    pub solution: Option<SolutionTree<P>>,
    /// Whether the reachable state space was fully explored. `false` when a
    /// solution was found or when a configured bound stopped the search.
    pub search_exhausted: bool,
    /// Number of states whose extensions were generated
    pub states_expanded: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl<P> SolverResult<P> {
    /// Whether a solution chain was found
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Tracks the configured bounds while a search runs
struct Budget {
    start: Instant,
    deadline: Option<Instant>,
    max_states: Option<usize>,
    expanded: usize,
}

impl Budget {
    fn new(config: &SolverConfig) -> Self {
        let start = Instant::now();
        Self {
            start,
            // A timeout past the representable range means no deadline
            deadline: config.timeout.and_then(|t| start.checked_add(t)),
            max_states: config.max_states,
            expanded: 0,
        }
    }

    /// Account for one expansion, or report that no more are allowed
    fn try_expand(&mut self) -> bool {
        if self.max_states.map_or(false, |max| self.expanded >= max) {
            debug!("state limit reached after {} expansions", self.expanded);
            return false;
        }
        if self.deadline.map_or(false, |d| Instant::now() >= d) {
            debug!("timeout reached after {} expansions", self.expanded);
            return false;
        }
        self.expanded += 1;
        true
    }

    fn finish<P>(&self, solution: Option<SolutionTree<P>>, search_exhausted: bool) -> SolverResult<P> {
        SolverResult {
            solution,
            search_exhausted,
            states_expanded: self.expanded,
            time_elapsed_ms: self.start.elapsed().as_millis() as u64,
        }
    }
}

/// Run `strategy` on `puzzle`
pub fn solve<P: Puzzle>(puzzle: P, strategy: SearchStrategy, config: &SolverConfig) -> SolverResult<P> {
    match strategy {
        SearchStrategy::DepthFirst => depth_first_search(puzzle, config),
        SearchStrategy::BreadthFirst => breadth_first_search(puzzle, config),
    }
}

/// Depth-first search without bounds.
///
/// Returns the first solution found in extension order, or `None` if no
/// solved state is reachable.
pub fn depth_first_solve<P: Puzzle>(puzzle: P) -> Option<SolutionTree<P>> {
    depth_first_search(puzzle, &SolverConfig::default()).solution
}

/// Breadth-first search without bounds.
///
/// Returns a solution with the fewest moves, or `None` if no solved state is
/// reachable.
pub fn breadth_first_solve<P: Puzzle>(puzzle: P) -> Option<SolutionTree<P>> {
    breadth_first_search(puzzle, &SolverConfig::default()).solution
}

/// A state on the current depth-first path and the extensions still to try
struct SearchFrame<P> {
    state: P,
    pending: std::vec::IntoIter<P>,
}

/// What depth-first search does with a newly reached state
enum Visit<P> {
    /// Duplicate on this path, or provably dead
    Skip,
    Solved(P),
    Expand(P),
}

fn classify<P: Puzzle>(state: P, on_path: &HashSet<P>) -> Visit<P> {
    if on_path.contains(&state) {
        Visit::Skip
    } else if state.fail_fast() {
        trace!("fail fast: {}", state);
        Visit::Skip
    } else if state.is_solved() {
        Visit::Solved(state)
    } else {
        Visit::Expand(state)
    }
}

/// Depth-first search with backtracking.
///
/// Duplicates are tracked along the current path only: a state is skipped
/// when it already appears between the root and the frame being expanded,
/// but may be reached again from a sibling branch. The first child that
/// leads to a solution ends the search; remaining siblings are not tried.
pub fn depth_first_search<P: Puzzle>(puzzle: P, config: &SolverConfig) -> SolverResult<P> {
    let mut budget = Budget::new(config);
    let mut on_path: HashSet<P> = HashSet::new();
    let mut stack: Vec<SearchFrame<P>> = Vec::new();

    debug!("depth-first search started");

    let mut next = Some(puzzle);
    loop {
        if let Some(state) = next.take() {
            match classify(state, &on_path) {
                Visit::Skip => {}
                Visit::Solved(leaf) => {
                    // The frame stack is exactly the path from the root
                    let path = stack
                        .into_iter()
                        .map(|frame| frame.state)
                        .chain(std::iter::once(leaf));
                    let solution = SolutionTree::from_path(path).map(|mut tree| {
                        tree.mark_in_solution();
                        tree
                    });
                    debug!(
                        "depth-first search solved after {} expansions",
                        budget.expanded
                    );
                    return budget.finish(solution, false);
                }
                Visit::Expand(state) => {
                    if !budget.try_expand() {
                        return budget.finish(None, false);
                    }
                    trace!("expanding at depth {}: {}", stack.len(), state);
                    let pending = state.extensions().into_iter();
                    on_path.insert(state.clone());
                    stack.push(SearchFrame { state, pending });
                }
            }
        }

        let Some(frame) = stack.last_mut() else {
            break;
        };
        match frame.pending.next() {
            Some(extension) => next = Some(extension),
            None => {
                if let Some(done) = stack.pop() {
                    on_path.remove(&done.state);
                }
            }
        }
    }

    debug!(
        "depth-first search exhausted after {} expansions",
        budget.expanded
    );
    budget.finish(None, true)
}

/// A state found by breadth-first search and the index it was reached from
struct Discovered<P> {
    state: P,
    parent: Option<usize>,
}

/// Breadth-first search.
///
/// The seen set is global: states are marked as soon as they are enqueued,
/// so a state reached from two frontier nodes of the same generation is
/// queued once. The initial state is never expanded when it is already
/// solved.
pub fn breadth_first_search<P: Puzzle>(puzzle: P, config: &SolverConfig) -> SolverResult<P> {
    let mut budget = Budget::new(config);
    let mut seen: HashSet<P> = HashSet::new();
    seen.insert(puzzle.clone());

    let mut discovered = vec![Discovered {
        state: puzzle,
        parent: None,
    }];
    let mut queue: VecDeque<usize> = VecDeque::from([0]);
    let mut current = 0;

    debug!("breadth-first search started");

    while !discovered[current].state.is_solved() {
        let Some(index) = queue.pop_front() else {
            break;
        };
        // A solved state needs no expansion, so it never counts against the budget
        if discovered[index].state.is_solved() {
            current = index;
            break;
        }
        if !budget.try_expand() {
            return budget.finish(None, false);
        }
        current = index;
        trace!(
            "expanding {} ({} queued): {}",
            current,
            queue.len(),
            discovered[current].state
        );

        for extension in discovered[current].state.extensions() {
            if seen.contains(&extension) {
                continue;
            }
            seen.insert(extension.clone());
            queue.push_back(discovered.len());
            discovered.push(Discovered {
                state: extension,
                parent: Some(current),
            });
        }
    }

    if !discovered[current].state.is_solved() {
        debug!(
            "breadth-first search exhausted after {} expansions, {} states seen",
            budget.expanded,
            seen.len()
        );
        return budget.finish(None, true);
    }

    // Walk parents back to the root, then rebuild the chain root first
    let mut path = Vec::new();
    let mut cursor = Some(current);
    while let Some(index) = cursor {
        path.push(index);
        cursor = discovered[index].parent;
    }

    let mut slots: Vec<Option<P>> = discovered.into_iter().map(|d| Some(d.state)).collect();
    let solution = SolutionTree::from_path(path.into_iter().rev().filter_map(|i| slots[i].take()));

    debug!(
        "breadth-first search solved after {} expansions",
        budget.expanded
    );
    budget.finish(solution, false)
}
