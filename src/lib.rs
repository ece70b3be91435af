//! # Search Games
//!
//! Classic state-space search and adversarial search over small puzzles and
//! games.
//!
//! ## Features
//!
//! - **Generic Search Strategies**: Recursive and iterative backtracking,
//!   breadth-first, and depth-first search over any `SearchProblem`
//! - **N-Jugs Puzzle**: Fill, empty, and pour until a target configuration is reached
//! - **Memoized Minimax**: Exhaustive two-player search with a per-session
//!   transposition table
//! - **Coin-Line Game**: Take one or two coins from either end; the AI plays perfectly
//! - **Batch Runs**: Load jug instances from JSON, time every strategy, write results back
//!
//! ## Quick Start
//!
//! ```
//! use search_games::games::jugs::NJugsProblem;
//! use search_games::search::{BreadthFirstSearch, Solver};
//!
//! // 1. Describe the puzzle
//! let problem = NJugsProblem::new(&[4, 3], &[2, 0])?;
//!
//! // 2. Pick a strategy
//! let mut bfs = BreadthFirstSearch::new(&problem);
//!
//! // 3. Solve
//! let result = bfs.solve()?;
//! assert_eq!(result.best_cost, Some(6));
//! # Ok::<(), search_games::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`search`]: Search problem trait and the four uninformed strategies
//! - [`minimax`]: Game trait and memoized minimax engine
//! - [`games`]: The n-jugs puzzle and the coin-line game
//! - [`error`]: Crate error type
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │   Search Strategies          │   │   Minimax Engine             │
//! │  - Backtracking (rec/iter)   │   │  - Exhaustive game tree      │
//! │  - BFS / DFS                 │   │  - Transposition table       │
//! └──────────────────────────────┘   └──────────────────────────────┘
//!               │                                   │
//!               │ SearchProblem trait               │ Game trait
//!               ▼                                   ▼
//!        ┌─────────────┐                     ┌─────────────┐
//!        │   N-Jugs    │                     │  Coin Line  │
//!        │   Puzzle    │                     │    Game     │
//!        └─────────────┘                     └─────────────┘
//! ```

#![warn(missing_docs)]

pub mod error;

/// Uninformed search over single-agent problems.
///
/// Contains the problem trait, the four strategies, and their result type.
pub mod search;

/// Minimax search for two-player games.
pub mod minimax;

/// Game and puzzle implementations.
///
/// Contains the n-jugs puzzle and the coin-line game.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use minimax::{Game, MinimaxSolver};
pub use search::{Algorithm, SearchConfig, SearchProblem, SearchResult, Solver};
