//! JSON bodies exchanged with the chat backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct NewSession {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendMessageRequest<'a> {
    pub content: &'a str,
    pub session_id: &'a str,
}

/// A bot reply as returned by `POST /api/chat/message`.
#[derive(Debug, Clone, Deserialize)]
pub struct BotReply {
    pub message: String,
    pub timestamp: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

/// One stored message in a server-side transcript.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptEntry {
    pub content: String,
    pub sender: String,
    pub timestamp: String,
}

/// The server-side transcript of a session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionTranscript {
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<TranscriptEntry>,
    #[serde(default)]
    pub total_messages: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    pub active_sessions: u64,
    #[serde(default)]
    pub system_status: Option<String>,
}
