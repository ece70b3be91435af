//! The n-jugs water transfer puzzle.
//!
//! ## Rules
//!
//! - N jugs with fixed positive capacities, all empty at the start
//! - `Fill(i)`: fill jug i to its capacity from an unlimited source
//! - `Empty(i)`: pour jug i down the drain
//! - `Pour(i, j)`: pour from jug i into jug j until i is empty or j is full
//! - Every action costs 1
//! - The goal is an exact amount vector, e.g. `(2, 0)` with capacities `(4, 3)`
//!
//! ## Example
//!
//! ```text
//! capacities (4, 3), goal (2, 0), shortest solution:
//!
//! (0,0) -fill(1)-> (0,3) -pour(1->0)-> (3,0) -fill(1)-> (3,3)
//!       -pour(1->0)-> (4,2) -empty(0)-> (0,2) -pour(1->0)-> (2,0)
//! ```

pub mod cases;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::problem::SearchProblem;

pub use cases::{load_cases, parse_cases, run_case, AlgorithmReport, CaseReport, TestCase};

/// Amount of water in each jug.
///
/// Serialized as a plain array of amounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JugState(Vec<u32>);

impl JugState {
    /// Create a state from per-jug amounts.
    pub fn new(amounts: Vec<u32>) -> Self {
        Self(amounts)
    }

    /// All jugs empty.
    pub fn empty(jugs: usize) -> Self {
        Self(vec![0; jugs])
    }

    /// Per-jug amounts.
    pub fn amounts(&self) -> &[u32] {
        &self.0
    }

    /// Number of jugs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the state describes no jugs at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

crate::impl_search_state!(JugState);

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, amount) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", amount)?;
        }
        write!(f, ")")
    }
}

/// Moves in the n-jugs puzzle. Jugs are addressed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JugAction {
    /// Fill jug i to capacity.
    Fill(usize),
    /// Empty jug i.
    Empty(usize),
    /// Pour from jug i into jug j.
    Pour(usize, usize),
}

crate::impl_search_action!(JugAction);

impl fmt::Display for JugAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JugAction::Fill(i) => write!(f, "fill({})", i),
            JugAction::Empty(i) => write!(f, "empty({})", i),
            JugAction::Pour(i, j) => write!(f, "pour({}->{})", i, j),
        }
    }
}

/// The n-jugs puzzle as a [`SearchProblem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NJugsProblem {
    capacities: Vec<u32>,
    goal: JugState,
}

impl NJugsProblem {
    /// Create a puzzle from jug capacities and a goal amount vector.
    ///
    /// Inputs are signed so that malformed test cases reach validation
    /// instead of failing to parse.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if a capacity is not positive, the goal
    /// is empty or negative, or the lengths differ.
    pub fn new(capacities: &[i64], goal: &[i64]) -> Result<Self> {
        let capacities = capacities
            .iter()
            .enumerate()
            .map(|(i, &c)| match u32::try_from(c) {
                Ok(c) if c > 0 => Ok(c),
                _ => Err(Error::configuration(format!(
                    "all capacities must be positive integers (jug {} has {})",
                    i, c
                ))),
            })
            .collect::<Result<Vec<u32>>>()?;

        if goal.is_empty() {
            return Err(Error::configuration("goal must be provided"));
        }

        if goal.len() != capacities.len() {
            return Err(Error::configuration(format!(
                "goal length {} must match number of capacities ({})",
                goal.len(),
                capacities.len()
            )));
        }

        let goal = goal
            .iter()
            .enumerate()
            .map(|(i, &g)| {
                u32::try_from(g).map_err(|_| {
                    Error::configuration(format!(
                        "goal amounts must be non-negative integers (jug {} has {})",
                        i, g
                    ))
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(Self {
            capacities,
            goal: JugState(goal),
        })
    }

    /// Jug capacities.
    pub fn capacities(&self) -> &[u32] {
        &self.capacities
    }

    /// Goal amounts.
    pub fn goal(&self) -> &JugState {
        &self.goal
    }

    /// Number of jugs.
    pub fn num_jugs(&self) -> usize {
        self.capacities.len()
    }

    /// Whether every amount in `state` is within its jug's capacity.
    pub fn in_bounds(&self, state: &JugState) -> bool {
        state.len() == self.num_jugs()
            && state
                .amounts()
                .iter()
                .zip(&self.capacities)
                .all(|(&amount, &cap)| amount <= cap)
    }

    fn check_jug(&self, state: &JugState, action: &JugAction, i: usize) -> Result<()> {
        if i >= self.num_jugs() {
            return Err(Error::invalid_action(action, state, format!("jug {} does not exist", i)));
        }
        Ok(())
    }
}

impl SearchProblem for NJugsProblem {
    type State = JugState;
    type Action = JugAction;

    fn start_state(&self) -> JugState {
        JugState::empty(self.num_jugs())
    }

    fn actions(&self, state: &JugState) -> Vec<JugAction> {
        let amounts = state.amounts();
        let mut actions = Vec::new();
        if amounts.len() != self.num_jugs() {
            return actions;
        }

        for i in 0..self.num_jugs() {
            if amounts[i] < self.capacities[i] {
                actions.push(JugAction::Fill(i));
            }

            if amounts[i] > 0 {
                actions.push(JugAction::Empty(i));

                for j in 0..self.num_jugs() {
                    if i != j && amounts[j] < self.capacities[j] {
                        actions.push(JugAction::Pour(i, j));
                    }
                }
            }
        }

        actions
    }

    fn succ(&self, state: &JugState, action: &JugAction) -> Result<JugState> {
        if state.len() != self.num_jugs() {
            return Err(Error::invalid_action(
                action,
                state,
                format!("state has {} jugs, puzzle has {}", state.len(), self.num_jugs()),
            ));
        }
        if !self.in_bounds(state) {
            return Err(Error::invalid_action(action, state, "state exceeds jug capacities"));
        }

        let mut next = state.0.clone();

        match *action {
            JugAction::Fill(i) => {
                self.check_jug(state, action, i)?;
                if next[i] == self.capacities[i] {
                    return Err(Error::invalid_action(action, state, "jug already full"));
                }
                next[i] = self.capacities[i];
            }
            JugAction::Empty(i) => {
                self.check_jug(state, action, i)?;
                if next[i] == 0 {
                    return Err(Error::invalid_action(action, state, "jug already empty"));
                }
                next[i] = 0;
            }
            JugAction::Pour(i, j) => {
                self.check_jug(state, action, i)?;
                self.check_jug(state, action, j)?;
                if i == j {
                    return Err(Error::invalid_action(action, state, "cannot pour a jug into itself"));
                }
                if next[i] == 0 {
                    return Err(Error::invalid_action(action, state, "source jug is empty"));
                }
                if next[j] == self.capacities[j] {
                    return Err(Error::invalid_action(action, state, "destination jug is full"));
                }

                let amount = next[i].min(self.capacities[j] - next[j]);
                next[i] -= amount;
                next[j] += amount;
            }
        }

        Ok(JugState(next))
    }

    fn is_end(&self, state: &JugState) -> bool {
        *state == self.goal
    }
}
