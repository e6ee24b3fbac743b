//! Error types for card parsing and simulation.
//!
//! Every fallible operation in the crate returns [`OddsError`]. The error is
//! raised by the call that detects the violation and is never retried.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OddsError>;

/// Errors raised while parsing cards or running a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OddsError {
    /// A token is not a recognised rank/suit pair.
    #[error("invalid card '{token}': {reason}")]
    InvalidCard {
        /// The offending token as supplied.
        token: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Wrong number of hole or community cards, a duplicate inside one hand,
    /// or a non-positive opponent/simulation count.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Known cards collide across hole and community cards, or exceed the deck.
    #[error("too many exclusions: {0}")]
    TooManyExclusions(String),

    /// The deck cannot supply the cards a trial needs.
    #[error("insufficient cards: requested {requested}, only {available} available")]
    InsufficientCards {
        /// Cards asked for.
        requested: usize,
        /// Cards left after exclusions.
        available: usize,
    },

    /// The run was cancelled before every trial completed.
    #[error("simulation cancelled after {completed} trials")]
    Cancelled {
        /// Trials finished before the cancellation was observed.
        completed: u64,
    },
}

/// Machine-readable error category, as handed to the calling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`OddsError::InvalidCard`].
    InvalidCard,
    /// See [`OddsError::InvalidInput`].
    InvalidInput,
    /// See [`OddsError::TooManyExclusions`].
    TooManyExclusions,
    /// See [`OddsError::InsufficientCards`].
    InsufficientCards,
    /// See [`OddsError::Cancelled`].
    Cancelled,
}

impl ErrorKind {
    /// Whether the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::Cancelled)
    }
}

impl OddsError {
    /// Get the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OddsError::InvalidCard { .. } => ErrorKind::InvalidCard,
            OddsError::InvalidInput(_) => ErrorKind::InvalidInput,
            OddsError::TooManyExclusions(_) => ErrorKind::TooManyExclusions,
            OddsError::InsufficientCards { .. } => ErrorKind::InsufficientCards,
            OddsError::Cancelled { .. } => ErrorKind::Cancelled,
        }
    }

    pub(crate) fn invalid_card(token: &str, reason: &'static str) -> Self {
        OddsError::InvalidCard {
            token: token.to_string(),
            reason,
        }
    }
}

/// Serializable error record: a kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error category.
    pub kind: ErrorKind,
    /// Display text of the error.
    pub message: String,
}

impl From<&OddsError> for ErrorReport {
    fn from(err: &OddsError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
