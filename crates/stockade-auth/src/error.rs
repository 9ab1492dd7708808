//! Error types for the auth crate.

use thiserror::Error;

/// Errors that can occur in account and session operations.
///
/// Failed credential checks are not errors; they are returned as
/// [`AuthOutcome::Failure`](crate::AuthOutcome::Failure) values.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An account with the same username (ignoring case) already exists.
    #[error("user already exists: {0}")]
    DuplicateUser(String),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(#[from] stockade_storage::StorageError),
}

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;
