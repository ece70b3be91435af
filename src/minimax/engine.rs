//! Memoized minimax search.
//!
//! The solver is generic over any game that implements the [`Game`] trait.
//! It owns the game and a [`TranspositionTable`], so one solver corresponds
//! to one game session: build a new solver (or call
//! [`MinimaxSolver::reset`]) when a new game starts.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::minimax::game::Game;
use crate::minimax::table::{Entry, TableStats, TranspositionTable};

/// Counters for one solver session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxStats {
    /// Positions evaluated by search (table misses).
    pub nodes: u64,
    /// Transposition table statistics.
    pub table: TableStats,
}

/// Exhaustive minimax with transposition memoization.
///
/// # Example
/// ```
/// use search_games::games::coin_line::{CoinAction, CoinLine, Side, Turn};
/// use search_games::minimax::MinimaxSolver;
///
/// let game = CoinLine::new(vec![3, 9])?;
/// let state = game.initial_state(Turn::Player);
/// let mut solver = MinimaxSolver::new(game);
///
/// let (value, action) = solver.minimax(&state, true)?;
/// assert_eq!(value, 6);
/// assert_eq!(action, Some(CoinAction::new(Side::Left, 1)));
/// # Ok::<(), search_games::Error>(())
/// ```
pub struct MinimaxSolver<G: Game> {
    /// The game being searched.
    game: G,

    /// Session cache.
    table: TranspositionTable<G::State, G::Action>,

    /// Positions evaluated by search.
    nodes: u64,
}

impl<G: Game> MinimaxSolver<G> {
    /// Create a solver with an empty table for `game`.
    pub fn new(game: G) -> Self {
        Self {
            game,
            table: TranspositionTable::new(),
            nodes: 0,
        }
    }

    /// Minimax value of `state` and the move achieving it.
    ///
    /// When `maximizing` is true the side to move picks the successor with the
    /// largest value, otherwise the smallest. Ties go to the earliest action in
    /// [`Game::available_actions`] order. Terminal states return their value
    /// and no action.
    ///
    /// # Errors
    /// Propagates errors from the game's transition and evaluation functions.
    pub fn minimax(&mut self, state: &G::State, maximizing: bool) -> Result<(i64, Option<G::Action>)> {
        if let Some(entry) = self.table.get(state, maximizing) {
            return Ok((entry.value, entry.action));
        }
        self.nodes += 1;

        if self.game.is_terminal(state) {
            let value = self.game.terminal_value(state)?;
            self.table.insert(state.clone(), maximizing, Entry { value, action: None });
            return Ok((value, None));
        }

        let mut best: Option<(i64, G::Action)> = None;
        for action in self.game.available_actions(state) {
            let next = self.game.apply_action(state, &action)?;
            let (value, _) = self.minimax(&next, !maximizing)?;

            let improves = match &best {
                None => true,
                Some((best_value, _)) if maximizing => value > *best_value,
                Some((best_value, _)) => value < *best_value,
            };
            if improves {
                best = Some((value, action));
            }
        }

        let (value, action) = best.ok_or_else(|| Error::Precondition {
            operation: "minimax",
            message: format!("non-terminal state without actions: {:?}", state),
        })?;

        self.table.insert(
            state.clone(),
            maximizing,
            Entry {
                value,
                action: Some(action.clone()),
            },
        );
        Ok((value, Some(action)))
    }

    /// Search for whichever side is to move in `state`.
    pub fn best_move(&mut self, state: &G::State) -> Result<(i64, Option<G::Action>)> {
        let maximizing = self.game.maximizer_to_move(state);
        self.minimax(state, maximizing)
    }

    /// Get reference to the game.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get reference to the session cache.
    pub fn table(&self) -> &TranspositionTable<G::State, G::Action> {
        &self.table
    }

    /// Get current statistics.
    pub fn stats(&self) -> MinimaxStats {
        MinimaxStats {
            nodes: self.nodes,
            table: self.table.stats(),
        }
    }

    /// Forget every cached evaluation.
    pub fn reset(&mut self) {
        self.table.clear();
        self.nodes = 0;
    }
}
