//! Error type shared across the workspace.
//!
//! All fallible operations return [`LedgerResult`]. The external state
//! platform is opaque: its failures arrive as a message string and are
//! forwarded unchanged in the [`LedgerError::State`] variant.

use thiserror::Error;

/// Errors produced by contract operations and the world-state boundary.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Arguments rejected before any state access.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// A read found no value under the key.
    #[error("{key} does not exist")]
    NotFound {
        /// The key that had no stored value.
        key: String,
    },

    /// A stored value could not be encoded or decoded.
    #[error("codec error: {source}")]
    Codec {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// An error forwarded from the external state platform.
    #[error("state error: {message}")]
    State {
        /// The platform's error value, as a message.
        message: String,
    },
}

impl LedgerError {
    /// Construct an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LedgerError::InvalidInput {
            message: message.into(),
        }
    }

    /// Construct a `NotFound` error for the given key.
    pub fn not_found(key: impl Into<String>) -> Self {
        LedgerError::NotFound { key: key.into() }
    }

    /// Construct a `State` error forwarding a platform failure.
    pub fn state(message: impl Into<String>) -> Self {
        LedgerError::State {
            message: message.into(),
        }
    }
}

/// Result alias used across all workspace crates.
pub type LedgerResult<T> = Result<T, LedgerError>;
