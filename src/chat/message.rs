use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::api::BotReply;

/// Shown in the log when a send fails.
pub const SEND_FAILURE_TEXT: &str = "Sorry, I couldn't get a response. Please try again.";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque message identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in a session's message log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    content: String,
    timestamp: DateTime<Utc>,
    confidence: Option<f64>,
    suggestions: Vec<String>,
    is_error: bool,
}

impl Message {
    fn new(sender: Sender, content: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::generate(),
            sender,
            content,
            timestamp,
            confidence: None,
            suggestions: Vec::new(),
            is_error: false,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content.into(), Utc::now())
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(Sender::Bot, content.into(), Utc::now())
    }

    /// Builds a bot message from a backend reply.
    ///
    /// The server timestamp is used when it parses; otherwise the receive
    /// time. Confidence is kept exactly as sent.
    pub fn from_reply(reply: BotReply) -> Self {
        let timestamp = parse_server_timestamp(&reply.timestamp).unwrap_or_else(|| {
            tracing::debug!(timestamp = %reply.timestamp, "unparseable server timestamp");
            Utc::now()
        });
        Self {
            confidence: reply.confidence,
            suggestions: reply.suggestions.unwrap_or_default(),
            ..Self::new(Sender::Bot, reply.message, timestamp)
        }
    }

    /// The synthetic reply appended when a send fails.
    pub fn send_failure() -> Self {
        Self {
            is_error: true,
            ..Self::bot(SEND_FAILURE_TEXT)
        }
    }

    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    pub const fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Confidence exactly as the backend sent it.
    pub const fn confidence(&self) -> Option<f64> {
        self.confidence
    }

    /// Confidence as a whole percentage, clamped to `0..=100`.
    ///
    /// Non-finite values are not displayable and yield `None`.
    pub fn confidence_percent(&self) -> Option<u8> {
        self.confidence
            .filter(|c| c.is_finite())
            .map(|c| (c.clamp(0.0, 1.0) * 100.0).round() as u8)
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub const fn is_error(&self) -> bool {
        self.is_error
    }
}

/// Parses an ISO-8601 timestamp from the backend.
///
/// Timestamps without an offset are taken as UTC.
pub fn parse_server_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
