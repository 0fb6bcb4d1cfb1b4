//! Error types for local storage and model validation.

use thiserror::Error;

/// Errors raised by a [`crate::LocalStorage`] backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized or deserialized
    #[error("invalid stored JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform storage is missing or refused the operation
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Validation failures for domain values built from user input or stored data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Note content cannot be empty")]
    EmptyContent,

    #[error("Please enter your username")]
    MissingUsername,

    #[error("Please enter your password")]
    MissingPassword,

    #[error("invalid user record: {0}")]
    InvalidUser(String),
}
