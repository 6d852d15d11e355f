//! Error handling for the dashboard client.
//!
//! Every failure a request can hit is normalized to one human-readable
//! message shown next to the triggering control; nothing here is fatal to
//! the session except an authentication failure, which the caller handles
//! by clearing the stored token.

use serde::Deserialize;

/// Error body the backend sends on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Client-side error taxonomy.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed (DNS, connect, timeout, broken transfer).
    Transport(String),
    /// The server answered with a non-success status. `message` carries the
    /// server's `detail` field when the body had one, else a generic
    /// "Request failed (<status>)".
    Status { status: u16, message: String },
    /// A 2xx response whose body could not be decoded as the expected JSON.
    InvalidBody(String),
}

impl ApiError {
    /// Build the error for a non-success status from the raw body text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.detail)
            .unwrap_or_else(|_| format!("Request failed ({status})"));
        ApiError::Status { status, message }
    }

    /// True for a 401, used to detect a dead session on the identity check.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    /// The message to show the user.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport(msg) => msg,
            ApiError::Status { message, .. } => message,
            ApiError::InvalidBody(msg) => msg,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { message, .. } => write!(f, "{message}"),
            ApiError::InvalidBody(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::InvalidBody(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
