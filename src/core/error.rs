//! Custom error types for the crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network operation failed (the request never completed)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-200 status; the body carries the
    /// error message meant for the user
    #[error("Order rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code returned by the backend
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The message to show in the error banner for this failure
    pub fn banner_message(&self) -> String {
        match self {
            Error::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
