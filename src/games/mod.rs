//! Concrete games and puzzles for the search engines.
//!
//! These serve as:
//!
//! 1. **Validation**: Small instances with hand-checked answers verify that the
//!    search strategies and the minimax engine are correct.
//!
//! 2. **Examples**: Show how to implement the `SearchProblem` and `Game` traits.
//!
//! 3. **Benchmarks**: Provide standard workloads for performance testing.
//!
//! ## Available Games
//!
//! - [`jugs`]: The n-jugs measuring puzzle, a single-agent [`SearchProblem`](crate::search::SearchProblem)
//! - [`coin_line`]: The two-player coin-line game, a minimax [`Game`](crate::minimax::Game)
//!
//! ## Adding New Games
//!
//! 1. Create a new module under `src/games/`
//! 2. Define state and action types
//! 3. Implement `SearchProblem` or `Game`
//! 4. Add tests that pin down known answers

pub mod coin_line;
pub mod jugs;
