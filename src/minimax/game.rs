//! Game trait definition for the minimax engine.
//!
//! Any two-player, turn-based, perfect-information game that implements the
//! `Game` trait can be searched by [`MinimaxSolver`](super::MinimaxSolver).

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// Trait for game states.
///
/// States are transposition-table keys, so two states that compare equal must
/// have the same game-theoretic value.
pub trait GameState: Clone + Eq + Hash + Debug {}

/// Trait for actions that can be taken in a game.
pub trait GameAction: Clone + Eq + Debug {}

/// The main Game trait that defines the interface for a two-player game.
///
/// Values are always measured from the maximizing side's point of view.
pub trait Game {
    /// The type representing a complete game state.
    type State: GameState;

    /// The type representing a move.
    type Action: GameAction;

    /// Check if the given state is terminal (game over).
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Get the list of available actions at the current state.
    ///
    /// The order matters: among equally good moves the engine keeps the
    /// first one.
    fn available_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action to a state and return the resulting new state.
    ///
    /// This should not modify the input state (immutable transition).
    fn apply_action(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// Value of a terminal state for the maximizing side.
    ///
    /// # Errors
    /// Returns [`crate::Error::Precondition`] if `state` is not terminal.
    fn terminal_value(&self, state: &Self::State) -> Result<i64>;

    /// Whether the side to move in `state` is the maximizing side.
    fn maximizer_to_move(&self, state: &Self::State) -> bool;
}
