//! Error types shared by the search problems, solvers, and games.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A problem, game, or solver was built from invalid parameters.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// What was wrong with the input.
        message: String,
    },

    /// An action was applied to a state it is not legal in.
    #[error("invalid action {action} in state {state}: {reason}")]
    InvalidAction {
        /// Rendering of the rejected action.
        action: String,
        /// Rendering of the state the action was applied to.
        state: String,
        /// Why the action was rejected.
        reason: String,
    },

    /// An operation was called on a state that does not satisfy its precondition.
    #[error("{operation} called on {message}")]
    Precondition {
        /// Name of the operation.
        operation: &'static str,
        /// Description of the offending state.
        message: String,
    },

    /// Text input could not be parsed.
    #[error("invalid {what} '{input}': expected {expected}")]
    Parse {
        /// Kind of value being parsed.
        what: &'static str,
        /// The rejected input.
        input: String,
        /// Accepted forms.
        expected: &'static str,
    },

    /// File system failure in one of the drivers.
    #[error("failed to {operation}: {source}")]
    Io {
        /// What was being attempted.
        operation: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a configuration error from any message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Build an invalid action error from the `Debug` forms of the action and state.
    pub fn invalid_action<A, S>(action: &A, state: &S, reason: impl Into<String>) -> Self
    where
        A: std::fmt::Debug + ?Sized,
        S: std::fmt::Debug + ?Sized,
    {
        Error::InvalidAction {
            action: format!("{:?}", action),
            state: format!("{:?}", state),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
