use super::state::{ChatState, PendingSend, SendOutcome, SkipReason};
use crate::api::{ChatBackend, SessionTranscript};
use crate::error::{ApiError, ChatError};

/// Greeting that seeds every new session's log.
pub const DEFAULT_WELCOME: &str = "Hello! I'm the LogiQ Gen assistant. How can I help you today?";

/// Drives a [`ChatState`] against a [`ChatBackend`].
///
/// All state mutation goes through these operations; renderers only read
/// [`ChatClient::state`].
pub struct ChatClient<B> {
    backend: B,
    state: ChatState,
    welcome: String,
}

impl<B: ChatBackend> ChatClient<B> {
    pub fn new(backend: B) -> Self {
        Self::with_welcome(backend, DEFAULT_WELCOME)
    }

    pub fn with_welcome(backend: B, welcome: impl Into<String>) -> Self {
        Self {
            backend,
            state: ChatState::new(),
            welcome: welcome.into(),
        }
    }

    pub const fn state(&self) -> &ChatState {
        &self.state
    }

    /// Obtains a new session from the backend and makes it active.
    pub async fn create_session(&mut self) -> Result<(), ChatError> {
        self.state.begin_connect();

        match self.backend.create_session().await {
            Ok(session) => {
                tracing::info!(session_id = %session.session_id, "session created");
                self.state.session_created(session.session_id, &self.welcome);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to create session");
                let error = ChatError::Connection(e);
                self.state.connection_failed(&error);
                Err(error)
            }
        }
    }

    /// Returns to `Disconnected` after a `create_session` future was dropped
    /// before completing.
    pub fn abort_connect(&mut self) {
        if self.state.abort_connect() {
            tracing::info!("connection attempt abandoned");
        }
    }

    /// Deletes the active session (best-effort) and creates a fresh one.
    pub async fn reset_session(&mut self) -> Result<(), ChatError> {
        self.close_session().await;
        self.create_session().await
    }

    /// Deactivates the active session and asks the backend to delete it.
    ///
    /// Deletion failures are logged and otherwise ignored.
    pub async fn close_session(&mut self) {
        let Some(session_id) = self.state.end_session() else {
            return;
        };
        match self.backend.delete_session(&session_id).await {
            Ok(()) => tracing::debug!(%session_id, "session deleted"),
            Err(e) => tracing::warn!(%session_id, error = %e, "failed to delete session"),
        }
    }

    /// Sends `text` in the active session and waits for the reply.
    ///
    /// Returns `Ok(SendOutcome::Skipped(_))` without any network call when
    /// the text is blank, no session is active, or a send is in flight.
    pub async fn send_message(&mut self, text: &str) -> Result<SendOutcome, ChatError> {
        match self.begin_send(text) {
            Ok(pending) => self.dispatch(pending).await,
            Err(reason) => Ok(SendOutcome::Skipped(reason)),
        }
    }

    /// First half of [`send_message`](Self::send_message): records the user
    /// message and marks the exchange busy.
    pub fn begin_send(&mut self, text: &str) -> Result<PendingSend, SkipReason> {
        let pending = self.state.begin_send(text);
        if let Err(reason) = &pending {
            tracing::debug!(%reason, "send skipped");
        }
        pending
    }

    /// Second half of [`send_message`](Self::send_message): performs the
    /// network call and applies its result.
    pub async fn dispatch(&mut self, pending: PendingSend) -> Result<SendOutcome, ChatError> {
        let result = self
            .backend
            .send_message(pending.session_id(), pending.content())
            .await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "failed to send message");
        }
        self.state.complete_send(pending, result)
    }

    /// Abandons an in-flight send; a late reply will be discarded.
    pub fn cancel_send(&mut self) -> bool {
        self.state.cancel_send()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.set_input(text);
    }

    /// Copies a suggestion into the input without sending it.
    pub fn select_suggestion(&mut self, suggestion: &str) {
        self.state.select_suggestion(suggestion);
    }

    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
    }

    /// Fetches the server-side transcript of the active session.
    pub async fn server_history(&self) -> Option<Result<SessionTranscript, ApiError>> {
        let session_id = self.state.session_id()?;
        Some(self.backend.session_history(session_id).await)
    }
}
