//! Configuration options for the search solvers.
//!
//! The budgets here turn runaway searches into reported results instead of
//! stack overflows or unbounded loops.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default recursion budget for the recursive backtracking strategy.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Largest accepted recursion budget. Each level reserves thread stack.
pub const MAX_RECURSION_DEPTH: usize = 100_000;

/// Configuration for the search solvers.
///
/// # Example
/// ```
/// use search_games::search::SearchConfig;
///
/// let config = SearchConfig::default().with_max_expansions(1_000);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_expansions, Some(1_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Deepest path the recursive backtracking strategy may descend to.
    ///
    /// The recursive strategy uses one native stack frame per path step.
    /// Reaching this depth aborts the search and reports it as exhausted.
    pub max_depth: usize,

    /// Maximum number of distinct states any strategy may explore.
    ///
    /// `None` lets the search run until the reachable space is exhausted.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    /// Create a new SearchConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the recursion budget.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder method: set the exploration budget.
    pub fn with_max_expansions(mut self, expansions: usize) -> Self {
        self.max_expansions = Some(expansions);
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::configuration("max_depth must be at least 1"));
        }

        if self.max_depth > MAX_RECURSION_DEPTH {
            return Err(Error::configuration(format!(
                "max_depth must be at most {} (got {})",
                MAX_RECURSION_DEPTH, self.max_depth
            )));
        }

        if self.max_expansions == Some(0) {
            return Err(Error::configuration("max_expansions must be at least 1"));
        }

        Ok(())
    }

    /// Whether an explored set of `explored` states has used up the budget.
    pub(crate) fn expansions_exceeded(&self, explored: usize) -> bool {
        matches!(self.max_expansions, Some(limit) if explored > limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.max_expansions, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_budgets_rejected() {
        assert!(SearchConfig::new().with_max_depth(0).validate().is_err());
        assert!(SearchConfig::new().with_max_expansions(0).validate().is_err());
    }

    #[test]
    fn test_recursion_budget_is_capped() {
        assert!(SearchConfig::new().with_max_depth(MAX_RECURSION_DEPTH).validate().is_ok());
        let err = SearchConfig::new()
            .with_max_depth(MAX_RECURSION_DEPTH + 1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_expansion_budget() {
        let config = SearchConfig::new().with_max_expansions(3);
        assert!(!config.expansions_exceeded(3));
        assert!(config.expansions_exceeded(4));
        assert!(!SearchConfig::new().expansions_exceeded(usize::MAX));
    }
}
