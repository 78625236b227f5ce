//! Error types for the qroute crate

use thiserror::Error;

/// Main error type for the qroute crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown location '{label}' (expected one of: {expected})")]
    UnknownLocation { label: String, expected: String },

    #[error("state {state} is out of bounds (must be 0-{max})")]
    InvalidState { state: usize, max: usize },

    #[error("state {state} has no playable actions while learning toward goal {goal}")]
    NoPlayableAction { state: usize, goal: usize },

    #[error("route from {start} to {end} did not reach the goal within {limit} steps")]
    RouteBoundExceeded {
        start: String,
        end: String,
        limit: usize,
    },

    #[error("location label '{label}' appears more than once")]
    DuplicateLocation { label: String },

    #[error("reward {value} at ({state}, {action}) must be finite")]
    InvalidReward {
        state: usize,
        action: usize,
        value: f64,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
