//! Minimax search for two-player, zero-sum, perfect-information games.
//!
//! # Overview
//!
//! The engine explores the full game tree from a position:
//! 1. Terminal positions are scored from the maximizing side's point of view
//! 2. The maximizing side picks the child with the largest value, the other side the smallest
//! 3. Every evaluated position is stored in a transposition table, so a position
//!    reached again through a different move order is looked up, not re-searched
//!
//! # Usage
//!
//! 1. Implement the `Game` trait for your game
//! 2. Create a `MinimaxSolver` for one game session
//! 3. Call `minimax()` (explicit side) or `best_move()` (side to move)
//!
//! The table belongs to the solver. Positions from different games must not
//! share a solver; start a new one for each new game.

pub mod engine;
pub mod game;
pub mod table;

// Re-export main types for convenient access
pub use engine::{MinimaxSolver, MinimaxStats};
pub use game::{Game, GameAction, GameState};
pub use table::{Entry, TableStats, TranspositionTable};
