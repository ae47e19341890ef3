//! Client-side error taxonomy.
//!
//! Connectivity loss is a local condition, not an HTTP status: a refused
//! mutation never reaches the socket.

/// Fallback text when the server supplies no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Notice shown when a mutation is refused while disconnected.
pub const DISCONNECTED_MESSAGE: &str = "Cannot reach the server. Retry the connection first.";

/// Errors surfaced by the client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The last liveness probe failed; the action was refused locally
    /// without issuing a request.
    #[error("disconnected from the server")]
    Disconnected,

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The HTTP request itself failed (connection refused, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ClientError {
    /// Human-readable text suitable for direct display, falling back to a
    /// generic message when the server supplied none.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Disconnected => DISCONNECTED_MESSAGE.to_string(),
            ClientError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            ClientError::Api { .. } | ClientError::Request(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
