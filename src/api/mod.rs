//! Client for the session-oriented chat REST API.
//!
//! Endpoints, relative to the server root:
//!
//! - `POST   /api/chat/session/new`
//! - `POST   /api/chat/message`
//! - `DELETE /api/chat/session/{id}`
//! - `GET    /api/chat/session/{id}/history`
//! - `GET    /api/chat/stats`
//! - `GET    /health`

mod client;
mod types;

use async_trait::async_trait;

use crate::error::ApiError;

pub use client::ApiClient;
pub use types::{BotReply, Health, NewSession, SessionTranscript, Stats, TranscriptEntry};

/// The backend operations the chat client depends on.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn create_session(&self) -> Result<NewSession, ApiError>;

    async fn send_message(&self, session_id: &str, content: &str) -> Result<BotReply, ApiError>;

    async fn delete_session(&self, session_id: &str) -> Result<(), ApiError>;

    async fn session_history(&self, session_id: &str) -> Result<SessionTranscript, ApiError>;
}
