//! Rule and argument errors.
//!
//! Every rejected request is reported as a `GameError` value; nothing in the
//! rules layer panics on bad input from a player or policy. The `Display`
//! text is the reason shown to whoever submitted the action.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a request was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// Malformed input: out-of-range coordinate, zero commitment, bad count.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A rule precondition does not hold.
    #[error("{0}")]
    IllegalAction(String),

    /// Unknown player, submersible, lock or rocket.
    #[error("{0} not found")]
    NotFound(String),

    /// Text that does not name an action kind.
    #[error("Unknown action kind: {0}")]
    UnknownActionKind(String),
}

impl GameError {
    /// Shorthand for [`GameError::IllegalAction`].
    pub fn illegal(reason: impl Into<String>) -> Self {
        Self::IllegalAction(reason.into())
    }

    /// Shorthand for [`GameError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Shorthand for [`GameError::NotFound`].
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

/// Result alias used throughout the rules.
pub type GameResult<T> = Result<T, GameError>;
