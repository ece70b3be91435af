//! Search problem trait definition.
//!
//! Any puzzle that implements the `SearchProblem` trait can be solved by every
//! strategy in [`crate::search::solver`]. The solvers never look past this
//! contract, so a new puzzle only needs to describe its states and moves.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// Trait for states of a search problem.
///
/// States are immutable values: solvers clone them into paths and hash them
/// into explored sets, so structural equality must mean "same state".
/// They must be `Send` because recursive backtracking runs on its own thread.
pub trait SearchState: Clone + Eq + Hash + Debug + Send {}

/// Trait for actions of a search problem.
pub trait SearchAction: Clone + Eq + Debug {}

/// The main trait that defines a single-agent search problem.
///
/// # Type Parameters
/// - `State`: the state type
/// - `Action`: the action type
///
/// # Example
/// ```ignore
/// struct MyPuzzle;
///
/// impl SearchProblem for MyPuzzle {
///     type State = MyState;
///     type Action = MyMove;
///
///     // ... implement required methods
/// }
/// ```
///
/// Problems are shared by reference with the recursive backtracking thread,
/// hence the `Sync` bound.
pub trait SearchProblem: Sync {
    /// The type representing a state of the puzzle.
    type State: SearchState;

    /// The type representing a move between states.
    type Action: SearchAction;

    /// Create the state every search starts from.
    fn start_state(&self) -> Self::State;

    /// Get the actions applicable in `state`, in the order solvers should try them.
    ///
    /// Returns an empty vector when nothing can be done from `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action to a state and return the resulting new state.
    ///
    /// This must not modify the input state.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidAction`] if `action` is not applicable in
    /// `state`.
    fn succ(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// Cost of taking `action` in `state`. Unit cost unless overridden.
    fn cost(&self, _state: &Self::State, _action: &Self::Action) -> u64 {
        1
    }

    /// Check whether `state` is a goal.
    fn is_end(&self, state: &Self::State) -> bool;
}

/// Macro to simplify implementing the marker traits for a state type.
#[macro_export]
macro_rules! impl_search_state {
    ($type:ty) => {
        impl $crate::search::problem::SearchState for $type {}
    };
}

/// Macro to simplify implementing the marker traits for an action type.
#[macro_export]
macro_rules! impl_search_action {
    ($type:ty) => {
        impl $crate::search::problem::SearchAction for $type {}
    };
}
