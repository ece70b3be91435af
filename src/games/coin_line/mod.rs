//! The coin-line game.
//!
//! ## Game Rules
//!
//! - A line of positive-valued coins lies between two players: you and the AI
//! - On each turn the mover takes 1 or 2 coins from either end of the line
//! - The face values taken are added to the mover's score
//! - Turns alternate until no coins remain
//! - Higher score wins; equal scores are a tie
//!
//! ## Example
//!
//! ```text
//! coins (3, 9, 1, 2), player to move
//! ├── L1 → (9, 1, 2)  player 3
//! ├── R1 → (3, 9, 1)  player 2
//! ├── L2 → (1, 2)     player 12
//! └── R2 → (3, 9)     player 3
//! ```
//!
//! The AI plays with [`MinimaxSolver`](crate::minimax::MinimaxSolver),
//! maximizing `ai_score - player_score`.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::minimax::game::{Game, GameAction, GameState};

/// Default upper bound for randomly generated coin values.
pub const DEFAULT_MAX_COIN: u32 = 15;

/// End of the line a move takes coins from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first coin in the sequence.
    Left,
    /// The last coin in the sequence.
    Right,
}

/// The two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    /// The human player.
    Player,
    /// The minimax AI.
    Ai,
}

impl Turn {
    /// The side that moves after this one.
    pub fn other(self) -> Self {
        match self {
            Turn::Player => Turn::Ai,
            Turn::Ai => Turn::Player,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Player => write!(f, "player"),
            Turn::Ai => write!(f, "ai"),
        }
    }
}

/// Take `count` coins from one end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinAction {
    /// End to take from.
    pub side: Side,
    /// Number of coins; only 1 and 2 are legal.
    pub count: u8,
}

impl CoinAction {
    /// Create an action. Legality is checked when it is applied.
    pub const fn new(side: Side, count: u8) -> Self {
        Self { side, count }
    }
}

impl GameAction for CoinAction {}

impl fmt::Display for CoinAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::Left => 'L',
            Side::Right => 'R',
        };
        write!(f, "{}{}", side, self.count)
    }
}

impl FromStr for CoinAction {
    type Err = Error;

    /// Parse the button labels `L1`, `L2`, `R1`, `R2` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim().to_ascii_uppercase();
        let side = match label.chars().next() {
            Some('L') => Side::Left,
            Some('R') => Side::Right,
            _ => return Err(parse_error(s)),
        };
        match &label[1..] {
            "1" => Ok(CoinAction::new(side, 1)),
            "2" => Ok(CoinAction::new(side, 2)),
            _ => Err(parse_error(s)),
        }
    }
}

fn parse_error(input: &str) -> Error {
    Error::Parse {
        what: "move",
        input: input.to_string(),
        expected: "L1, L2, R1 or R2",
    }
}

/// Coins left in the line, both scores, and the side to move.
///
/// Every field takes part in equality and hashing, so a state is a complete
/// transposition key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinState {
    coins: Vec<u32>,
    player_score: u64,
    ai_score: u64,
    turn: Turn,
}

impl CoinState {
    /// A fresh line with both scores at zero.
    pub fn new(coins: Vec<u32>, turn: Turn) -> Self {
        Self::with_scores(coins, 0, 0, turn)
    }

    /// A position with explicit scores.
    pub fn with_scores(coins: Vec<u32>, player_score: u64, ai_score: u64, turn: Turn) -> Self {
        Self {
            coins,
            player_score,
            ai_score,
            turn,
        }
    }

    /// Coins left, left to right.
    pub fn coins(&self) -> &[u32] {
        &self.coins
    }

    /// The human player's score.
    pub fn player_score(&self) -> u64 {
        self.player_score
    }

    /// The AI's score.
    pub fn ai_score(&self) -> u64 {
        self.ai_score
    }

    /// Side to move.
    pub fn turn(&self) -> Turn {
        self.turn
    }
}

impl GameState for CoinState {}

impl fmt::Display for CoinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coins:{:?} Player:{} AI:{} Turn:{}",
            self.coins, self.player_score, self.ai_score, self.turn
        )
    }
}

/// One coin-line game, defined by its initial coin sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinLine {
    coins: Vec<u32>,
    total: u64,
}

impl CoinLine {
    /// Create a game from a coin sequence.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if the sequence is empty or contains a
    /// zero-valued coin.
    pub fn new(coins: Vec<u32>) -> Result<Self> {
        if coins.is_empty() {
            return Err(Error::configuration("coin sequence must not be empty"));
        }
        if let Some(i) = coins.iter().position(|&c| c == 0) {
            return Err(Error::configuration(format!(
                "coin values must be positive (coin {} is 0)",
                i
            )));
        }

        let total = coins.iter().map(|&c| c as u64).sum();
        Ok(Self { coins, total })
    }

    /// Create a game of `count` coins with values drawn from `1..=max_value`.
    pub fn random<R: Rng>(count: usize, max_value: u32, rng: &mut R) -> Result<Self> {
        if max_value == 0 {
            return Err(Error::configuration("max coin value must be positive"));
        }
        let coins = (0..count).map(|_| rng.gen_range(1..=max_value)).collect();
        Self::new(coins)
    }

    /// The initial coin sequence.
    pub fn coins(&self) -> &[u32] {
        &self.coins
    }

    /// Sum of the initial coin sequence.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Starting position with `first` to move.
    pub fn initial_state(&self, first: Turn) -> CoinState {
        CoinState::new(self.coins.clone(), first)
    }

    /// Whether scores plus remaining coins add up to the initial total.
    pub fn is_consistent(&self, state: &CoinState) -> bool {
        let remaining: u64 = state.coins.iter().map(|&c| c as u64).sum();
        state.player_score + state.ai_score + remaining == self.total
    }

    /// Side to move.
    pub fn player(&self, state: &CoinState) -> Turn {
        state.turn
    }

    /// Legal moves: one coin from either end, plus two coins from either end
    /// when at least two remain. Empty once the line is empty.
    pub fn actions(&self, state: &CoinState) -> Vec<CoinAction> {
        match state.coins.len() {
            0 => Vec::new(),
            1 => vec![CoinAction::new(Side::Left, 1), CoinAction::new(Side::Right, 1)],
            _ => vec![
                CoinAction::new(Side::Left, 1),
                CoinAction::new(Side::Right, 1),
                CoinAction::new(Side::Left, 2),
                CoinAction::new(Side::Right, 2),
            ],
        }
    }

    /// Position after the side to move takes the coins named by `action`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidAction`] if the count is not 1 or 2 or exceeds
    /// the coins left.
    pub fn succ(&self, state: &CoinState, action: &CoinAction) -> Result<CoinState> {
        let count = action.count as usize;
        if !(1..=2).contains(&count) {
            return Err(Error::invalid_action(action, state, "count must be 1 or 2"));
        }
        if count > state.coins.len() {
            return Err(Error::invalid_action(
                action,
                state,
                format!("only {} coins left", state.coins.len()),
            ));
        }

        let split = match action.side {
            Side::Left => count,
            Side::Right => state.coins.len() - count,
        };
        let (head, tail) = state.coins.split_at(split);
        let (taken, rest) = match action.side {
            Side::Left => (head, tail),
            Side::Right => (tail, head),
        };
        let gained: u64 = taken.iter().map(|&c| c as u64).sum();

        let (player_score, ai_score) = match state.turn {
            Turn::Player => (state.player_score + gained, state.ai_score),
            Turn::Ai => (state.player_score, state.ai_score + gained),
        };

        Ok(CoinState {
            coins: rest.to_vec(),
            player_score,
            ai_score,
            turn: state.turn.other(),
        })
    }

    /// Whether the game is over.
    pub fn terminal(&self, state: &CoinState) -> bool {
        state.coins.is_empty()
    }

    /// Final scores as `(player, ai)`.
    ///
    /// # Errors
    /// Returns [`Error::Precondition`] while coins remain.
    pub fn utility(&self, state: &CoinState) -> Result<(u64, u64)> {
        self.require_terminal("utility", state)?;
        Ok((state.player_score, state.ai_score))
    }

    /// The side with the higher final score, `None` on a tie.
    ///
    /// # Errors
    /// Returns [`Error::Precondition`] while coins remain.
    pub fn winner(&self, state: &CoinState) -> Result<Option<Turn>> {
        let (player, ai) = self.utility(state)?;
        Ok(match player.cmp(&ai) {
            std::cmp::Ordering::Greater => Some(Turn::Player),
            std::cmp::Ordering::Less => Some(Turn::Ai),
            std::cmp::Ordering::Equal => None,
        })
    }

    fn require_terminal(&self, operation: &'static str, state: &CoinState) -> Result<()> {
        if !self.terminal(state) {
            return Err(Error::Precondition {
                operation,
                message: format!("a game in progress ({} coins left)", state.coins.len()),
            });
        }
        Ok(())
    }
}

impl Game for CoinLine {
    type State = CoinState;
    type Action = CoinAction;

    fn is_terminal(&self, state: &CoinState) -> bool {
        self.terminal(state)
    }

    fn available_actions(&self, state: &CoinState) -> Vec<CoinAction> {
        self.actions(state)
    }

    fn apply_action(&self, state: &CoinState, action: &CoinAction) -> Result<CoinState> {
        self.succ(state, action)
    }

    fn terminal_value(&self, state: &CoinState) -> Result<i64> {
        self.require_terminal("terminal_value", state)?;
        Ok(state.ai_score as i64 - state.player_score as i64)
    }

    fn maximizer_to_move(&self, state: &CoinState) -> bool {
        state.turn == Turn::Ai
    }
}
