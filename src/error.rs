//! Error types shared by the backend client and the chat state machine.

use thiserror::Error;

/// A failed call against the chat backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused, timeout).
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{url} returned {status}: {body}")]
    Status { url: String, status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response body from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Returns `true` if the backend was unreachable or timed out.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// The two user-visible failure kinds of the chat client.
///
/// The `Display` text is exactly what the error banner shows.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Session creation failed; the client is disconnected.
    #[error("Failed to connect to chatbot service")]
    Connection(#[source] ApiError),

    /// A message could not be delivered or answered.
    #[error("Failed to get response")]
    Send(#[source] ApiError),
}

impl ChatError {
    /// The underlying backend failure.
    pub const fn api_error(&self) -> &ApiError {
        match self {
            Self::Connection(e) | Self::Send(e) => e,
        }
    }
}
