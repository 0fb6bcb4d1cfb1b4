//! Error types for the notes API client.

use store::ModelError;
use thiserror::Error;

/// Errors that can occur when talking to the notes server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Credentials were rejected
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// A note request was made without an attached token
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Input rejected before any request was made
    #[error(transparent)]
    Invalid(#[from] ModelError),
}

impl ApiError {
    /// Map a transport error, singling out connection failures and timeouts.
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ApiError::Unreachable(e.to_string())
        } else {
            ApiError::Request(e)
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::AuthFailed(message) => message.clone(),
            ApiError::AuthRequired => "Please log in first".to_string(),
            ApiError::Unreachable(_) => "Cannot reach the notes server".to_string(),
            ApiError::Invalid(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    /// Title for the error dialog.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::AuthFailed(_) => "Login failed",
            ApiError::AuthRequired => "Not logged in",
            ApiError::Invalid(_) => "Invalid input",
            ApiError::Unreachable(_) => "Network error",
            _ => "Request failed",
        }
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
