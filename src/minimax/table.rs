//! Transposition table for minimax values.
//!
//! Entries are keyed by the full game state plus the side being optimised.
//! The table only ever grows; a new game session starts with a fresh table
//! (or an explicit [`TranspositionTable::clear`]).

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A cached minimax evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<A> {
    /// Minimax value of the position.
    pub value: i64,
    /// Best move, `None` at terminal positions.
    pub action: Option<A>,
}

/// Table lookup statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    /// Number of stored positions.
    pub entries: usize,
    /// Lookups answered from the table.
    pub hits: u64,
    /// Lookups that had to be searched.
    pub misses: u64,
}

impl TableStats {
    /// Fraction of lookups answered from the table.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Minimax cache owned by one game session.
#[derive(Debug, Clone)]
pub struct TranspositionTable<S, A> {
    /// Indexed by `maximizing as usize`.
    entries: [FxHashMap<S, Entry<A>>; 2],
    hits: u64,
    misses: u64,
}

impl<S, A> Default for TranspositionTable<S, A> {
    fn default() -> Self {
        Self {
            entries: [FxHashMap::default(), FxHashMap::default()],
            hits: 0,
            misses: 0,
        }
    }
}

impl<S: Eq + Hash, A: Clone> TranspositionTable<S, A> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a position, counting the hit or miss.
    pub fn get(&mut self, state: &S, maximizing: bool) -> Option<Entry<A>> {
        match self.entries[maximizing as usize].get(state) {
            Some(entry) => {
                self.hits += 1;
                Some(entry.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store the evaluation of a position.
    pub fn insert(&mut self, state: S, maximizing: bool, entry: Entry<A>) {
        self.entries[maximizing as usize].insert(state, entry);
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.entries[0].len() + self.entries[1].len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        for map in &mut self.entries {
            map.clear();
        }
        self.hits = 0;
        self.misses = 0;
    }

    /// Current statistics.
    pub fn stats(&self) -> TableStats {
        TableStats {
            entries: self.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
