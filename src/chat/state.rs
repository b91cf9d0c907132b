//! The chat state container.
//!
//! `ChatState` owns everything the view shows: the active session, the
//! message log, the input draft, the loading and connectivity flags, the
//! error banner, and the session history. It changes only through the
//! transition methods below. Two independent state machines live here:
//!
//! - connection: `Disconnected -> Connecting -> Connected`
//! - exchange: `Idle -> Sending -> Idle` (the `loading` flag)
//!
//! A send is split into [`ChatState::begin_send`] and
//! [`ChatState::complete_send`]. Every reset or cancellation bumps a
//! generation counter, so a reply that arrives for an abandoned send is
//! dropped instead of landing in the wrong conversation.

use std::fmt;

use super::message::{Message, Sender};
use super::session::Session;
use crate::api::BotReply;
use crate::error::{ApiError, ChatError};

/// The backend rejects message content longer than this.
pub const MAX_MESSAGE_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    Disconnected,
    Connecting,
    Connected,
}

/// Why a send request was ignored without touching the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyInput,
    NotConnected,
    Busy,
    TooLong,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("message is empty"),
            Self::NotConnected => f.write_str("not connected to a chat session"),
            Self::Busy => f.write_str("still waiting for the previous reply"),
            Self::TooLong => write!(f, "message exceeds {MAX_MESSAGE_CHARS} characters"),
        }
    }
}

/// What happened to a send request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was sent.
    Skipped(SkipReason),
    /// The reply was appended to the log.
    Replied,
    /// The reply arrived after a reset or cancel and was dropped.
    Discarded,
}

/// A send that has been recorded optimistically and awaits the backend.
#[derive(Debug, Clone)]
pub struct PendingSend {
    session_id: String,
    content: String,
    generation: u64,
}

impl PendingSend {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug)]
pub struct ChatState {
    phase: ConnectionPhase,
    session_id: Option<String>,
    messages: Vec<Message>,
    input: String,
    loading: bool,
    error: Option<String>,
    history: Vec<Session>,
    generation: u64,
    log_epoch: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub const fn new() -> Self {
        Self {
            phase: ConnectionPhase::Disconnected,
            session_id: None,
            messages: Vec::new(),
            input: String::new(),
            loading: false,
            error: None,
            history: Vec::new(),
            generation: 0,
            log_epoch: 0,
        }
    }

    // --- session lifecycle ---

    pub fn begin_connect(&mut self) {
        self.phase = ConnectionPhase::Connecting;
    }

    /// Activates a freshly created session and seeds its log.
    pub fn session_created(&mut self, session_id: String, welcome: &str) {
        self.history.insert(0, Session::new(session_id.clone(), welcome));
        self.messages = vec![Message::bot(welcome)];
        self.session_id = Some(session_id);
        self.phase = ConnectionPhase::Connected;
        self.loading = false;
        self.error = None;
        self.generation += 1;
        self.log_epoch += 1;
    }

    /// Records a failed session creation. The log is left as it was.
    pub fn connection_failed(&mut self, error: &ChatError) {
        self.phase = ConnectionPhase::Disconnected;
        self.session_id = None;
        self.error = Some(error.to_string());
    }

    /// Backs out of a connection attempt that was abandoned before the
    /// backend answered. The log and banner are left as they were.
    pub fn abort_connect(&mut self) -> bool {
        if self.phase != ConnectionPhase::Connecting {
            return false;
        }
        self.phase = ConnectionPhase::Disconnected;
        true
    }

    /// Deactivates the current session and abandons any in-flight send.
    ///
    /// Returns the id of the session that was active, if any.
    pub fn end_session(&mut self) -> Option<String> {
        self.phase = ConnectionPhase::Disconnected;
        self.loading = false;
        self.generation += 1;
        self.session_id.take()
    }

    // --- message exchange ---

    /// Validates `text`, appends it to the log and marks the exchange busy.
    pub fn begin_send(&mut self, text: &str) -> Result<PendingSend, SkipReason> {
        if text.trim().is_empty() {
            return Err(SkipReason::EmptyInput);
        }
        let Some(session_id) = self.session_id.clone() else {
            return Err(SkipReason::NotConnected);
        };
        if self.loading {
            return Err(SkipReason::Busy);
        }
        if text.chars().count() > MAX_MESSAGE_CHARS {
            return Err(SkipReason::TooLong);
        }

        let message = Message::user(text);
        tracing::debug!(message_id = %message.id(), %session_id, "sending message");
        self.touch_active(&message);
        self.messages.push(message);
        self.input.clear();
        self.loading = true;

        Ok(PendingSend {
            session_id,
            content: text.to_string(),
            generation: self.generation,
        })
    }

    /// Applies the backend result of a send started with `begin_send`.
    ///
    /// A failure appends one error-flagged bot message, sets the banner and
    /// is returned as [`ChatError::Send`]. The optimistic user message stays.
    pub fn complete_send(
        &mut self,
        pending: PendingSend,
        result: Result<BotReply, ApiError>,
    ) -> Result<SendOutcome, ChatError> {
        if pending.generation != self.generation
            || self.session_id.as_deref() != Some(pending.session_id.as_str())
        {
            tracing::debug!(session_id = %pending.session_id, "dropping reply for abandoned send");
            return Ok(SendOutcome::Discarded);
        }

        self.loading = false;

        match result {
            Ok(reply) => {
                let message = Message::from_reply(reply);
                self.touch_active(&message);
                self.messages.push(message);
                Ok(SendOutcome::Replied)
            }
            Err(e) => {
                let message = Message::send_failure();
                self.touch_active(&message);
                self.messages.push(message);
                let error = ChatError::Send(e);
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Abandons the in-flight send, if any. The optimistic message stays.
    pub fn cancel_send(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        self.generation += 1;
        true
    }

    // --- input and banner ---

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Copies a suggestion into the input verbatim. Nothing is sent.
    pub fn select_suggestion(&mut self, suggestion: &str) {
        self.input = suggestion.to_string();
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // --- accessors ---

    pub const fn phase(&self) -> ConnectionPhase {
        self.phase
    }

    pub fn is_connected(&self) -> bool {
        self.phase == ConnectionPhase::Connected
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Past and current sessions, newest first.
    pub fn history(&self) -> &[Session] {
        &self.history
    }

    /// Changes whenever the log is replaced by a new session's log.
    pub const fn log_epoch(&self) -> u64 {
        self.log_epoch
    }

    /// Suggestions attached to the most recent bot reply.
    pub fn latest_suggestions(&self) -> &[String] {
        self.messages
            .iter()
            .rev()
            .find(|m| m.sender() == Sender::Bot)
            .map(Message::suggestions)
            .unwrap_or_default()
    }

    fn touch_active(&mut self, message: &Message) {
        let Some(id) = self.session_id.as_deref() else {
            return;
        };
        if let Some(entry) = self.history.iter_mut().find(|s| s.id() == id) {
            entry.touch(message.content(), message.timestamp());
        }
    }
}
