//! Uninformed search over implicit state graphs.
//!
//! This module provides a problem contract and four strategies that explore
//! the graph it describes (nodes are states, edges are legal actions).
//!
//! # Usage
//!
//! 1. Implement the `SearchProblem` trait for your puzzle
//! 2. Create a solver (or pick an `Algorithm`) with a `SearchConfig`
//! 3. Call `solve()` and inspect the returned `SearchResult`
//!
//! # Example
//!
//! ```
//! use search_games::games::jugs::NJugsProblem;
//! use search_games::search::{BreadthFirstSearch, Solver};
//!
//! let problem = NJugsProblem::new(&[4, 3], &[2, 0])?;
//! let result = BreadthFirstSearch::new(&problem).solve()?;
//!
//! assert!(result.found);
//! assert_eq!(result.best_cost, Some(6));
//! # Ok::<(), search_games::Error>(())
//! ```
//!
//! # Strategies
//!
//! | Strategy | Frontier | Stops at | Cost guarantee |
//! |----------|----------|----------|----------------|
//! | Backtracking | call stack | exhaustion | cheapest traversed path |
//! | Iterative backtracking | explicit stack | exhaustion | same as backtracking |
//! | BFS | FIFO queue | first goal | fewest actions |
//! | DFS | explicit stack | first goal | none |

pub mod config;
pub mod problem;
pub mod result;
pub mod solver;

// Re-export main types for convenient access
pub use config::{SearchConfig, DEFAULT_MAX_DEPTH, MAX_RECURSION_DEPTH};
pub use problem::{SearchAction, SearchProblem, SearchState};
pub use result::SearchResult;
pub use solver::{
    Algorithm, BacktrackingSearch, BreadthFirstSearch, DepthFirstSearch,
    IterativeBacktrackingSearch, Solver,
};
