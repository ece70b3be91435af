//! The record every search strategy returns.

use serde::{Deserialize, Serialize};

/// Outcome of one solver run.
///
/// `best_path` always starts with the start state. When no solution was
/// found it holds only the start state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult<S> {
    /// Cost of the reported path, `None` when no solution was found.
    pub best_cost: Option<u64>,
    /// States from the start to the reported goal, both inclusive.
    pub best_path: Vec<S>,
    /// Whether a goal was reached.
    pub found: bool,
    /// Number of distinct states in the explored set when the search stopped.
    pub expanded: usize,
    /// Deepest path length (in actions) the search reached.
    pub max_depth: usize,
    /// The search hit its depth or expansion budget before finishing.
    pub exhausted: bool,
    /// States whose successors were generated.
    #[serde(default)]
    pub branched: usize,
    /// Successor states generated, pruned ones included.
    #[serde(default)]
    pub generated: usize,
}

impl<S: Clone> SearchResult<S> {
    /// A completed search that reached a goal along `path`.
    pub fn solved(cost: u64, path: Vec<S>, expanded: usize, max_depth: usize) -> Self {
        Self {
            best_cost: Some(cost),
            best_path: path,
            found: true,
            expanded,
            max_depth,
            exhausted: false,
            branched: 0,
            generated: 0,
        }
    }

    /// A completed search that ruled out every path to a goal.
    pub fn unsolved(start: S, expanded: usize, max_depth: usize) -> Self {
        Self {
            best_cost: None,
            best_path: vec![start],
            found: false,
            expanded,
            max_depth,
            exhausted: false,
            branched: 0,
            generated: 0,
        }
    }

    /// A search aborted by its budget. Partial solutions are discarded.
    pub fn exhausted(start: S, expanded: usize, max_depth: usize) -> Self {
        Self {
            exhausted: true,
            ..Self::unsolved(start, expanded, max_depth)
        }
    }

    /// Attach the branching counters gathered during the search.
    pub fn with_branching(mut self, branched: usize, generated: usize) -> Self {
        self.branched = branched;
        self.generated = generated;
        self
    }

    /// Mean number of successors per branched state, 0 if nothing branched.
    pub fn branching_factor(&self) -> f64 {
        if self.branched == 0 {
            0.0
        } else {
            self.generated as f64 / self.branched as f64
        }
    }

    /// Number of actions on the reported path.
    pub fn path_len(&self) -> usize {
        self.best_path.len().saturating_sub(1)
    }

    /// Short status label used by the drivers.
    pub fn status(&self) -> &'static str {
        if self.exhausted {
            "EXHAUSTED"
        } else if self.found {
            "FOUND"
        } else {
            "NO SOLUTION"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_result_reports_not_found() {
        let result = SearchResult::exhausted(0u32, 12, 4);
        assert!(result.exhausted);
        assert!(!result.found);
        assert_eq!(result.best_cost, None);
        assert_eq!(result.best_path, vec![0]);
        assert_eq!(result.expanded, 12);
        assert_eq!(result.status(), "EXHAUSTED");
    }

    #[test]
    fn test_solved_result_serializes_cost() {
        let result = SearchResult::solved(2, vec![0u32, 1, 2], 3, 2);
        assert_eq!(result.path_len(), 2);
        assert_eq!(result.status(), "FOUND");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["best_cost"], 2);
        assert_eq!(json["found"], true);

        let unsolved = serde_json::to_value(SearchResult::unsolved(0u32, 1, 0)).unwrap();
        assert!(unsolved["best_cost"].is_null());
    }

    #[test]
    fn test_branching_factor() {
        let result = SearchResult::unsolved(0u32, 6, 3);
        assert_eq!(result.branching_factor(), 0.0);

        let result = result.with_branching(4, 10);
        assert!((result.branching_factor() - 2.5).abs() < 1e-12);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["branched"], 4);
        assert_eq!(json["generated"], 10);
    }
}
