use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Select, Text};
use std::future::Future;
use std::path::Path;

use super::client::ChatClient;
use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::message::Sender;
use super::state::{ConnectionPhase, SkipReason};
use super::transcript;
use super::ui;
use super::view::{Bubble, View};
use crate::api::ChatBackend;
use crate::config::ResolvedConfig;
use crate::error::ChatError;
use crate::ui::{Spinner, is_prompt_cancelled};

const DEFAULT_HELP: &str = "Type a message, /help for commands, Ctrl+C to quit";
const OFFLINE_HELP: &str = "Offline: /reset to reconnect, /quit to exit";

/// The interactive chat loop.
///
/// Reads the prompt, feeds the [`ChatClient`], and prints whatever part of
/// the projected view has not been printed yet.
pub struct ChatRepl<B> {
    client: ChatClient<B>,
    config: ResolvedConfig,
    rendered: usize,
    epoch: u64,
}

impl<B: ChatBackend> ChatRepl<B> {
    pub const fn new(client: ChatClient<B>, config: ResolvedConfig) -> Self {
        Self {
            client,
            config,
            rendered: 0,
            epoch: 0,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config.base_url);
        self.connect(false).await;

        loop {
            let (draft, help, render_config) = {
                let view = View::project(self.client.state());
                (
                    view.input.to_string(),
                    help_line(&view),
                    prompt_render_config(view.phase),
                )
            };

            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_initial_value(&draft)
                .with_help_message(&help)
                .prompt();

            match input {
                Ok(line) => {
                    // The draft has been consumed by the prompt.
                    self.client.set_input(String::new());
                    match parse_input(&line) {
                        Input::Empty => {}
                        Input::Command(cmd) => {
                            if !self.handle_command(cmd).await? {
                                break;
                            }
                        }
                        Input::Text(text) => self.send(&text).await,
                    }
                }
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        if interruptible(self.client.close_session()).await.is_none() {
            tracing::warn!("session deletion interrupted");
        }
        ui::print_goodbye();
        Ok(())
    }

    async fn connect(&mut self, reset: bool) {
        let spinner = Spinner::new("Connecting...");
        let result = if reset {
            interruptible(self.client.reset_session()).await
        } else {
            interruptible(self.client.create_session()).await
        };
        spinner.stop();

        match result {
            Some(Ok(())) => {
                if let Some(id) = self.client.state().session_id() {
                    ui::print_connected(id);
                }
                self.render();
            }
            Some(Err(e)) => self.show_error(&e),
            None => {
                self.client.abort_connect();
                println!();
                ui::print_info("Connection cancelled.");
            }
        }
    }

    async fn send(&mut self, text: &str) {
        let pending = match self.client.begin_send(text) {
            Ok(pending) => pending,
            Err(SkipReason::NotConnected) => {
                ui::print_disconnected();
                return;
            }
            Err(reason) => {
                ui::print_error(&format!("Message not sent: {reason}"));
                return;
            }
        };

        let typing = self.render();

        let outcome = interruptible(self.client.dispatch(pending)).await;
        drop(typing);

        match outcome {
            Some(Ok(_)) => {
                self.render();
            }
            Some(Err(e)) => {
                self.render();
                self.show_error(&e);
            }
            None => {
                self.client.cancel_send();
                println!();
                ui::print_info("Cancelled.");
            }
        }
    }

    /// Prints bubbles not printed yet. Returns the typing spinner when a
    /// reply is pending.
    fn render(&mut self) -> Option<Spinner> {
        let state = self.client.state();
        if state.log_epoch() != self.epoch {
            self.epoch = state.log_epoch();
            self.rendered = 0;
        }

        let view = View::project(state);
        let mut typing = None;
        for bubble in view.bubbles.iter().skip(self.rendered) {
            match bubble {
                // The prompt line already echoes what the user typed.
                Bubble::Message(m) if m.sender() == Sender::User => self.rendered += 1,
                Bubble::Message(m) => {
                    ui::print_message(m);
                    self.rendered += 1;
                }
                Bubble::Typing => typing = Some(Spinner::new("Bot is typing...")),
            }
        }
        typing
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config, self.client.state().session_id());
            }
            SlashCommand::Dismiss => self.client.dismiss_error(),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => self.show_server_history().await,
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Reset => self.connect(true).await,
            SlashCommand::Save(path) => self.save_transcript(path.as_deref()),
            SlashCommand::Sessions => ui::print_sessions(
                self.client.state().history(),
                self.client.state().session_id(),
            ),
            SlashCommand::Suggest(index) => self.pick_suggestion(index)?,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    async fn show_server_history(&self) {
        let spinner = Spinner::new("Loading history...");
        let result = interruptible(self.client.server_history()).await;
        spinner.stop();

        match result {
            None => ui::print_info("Cancelled."),
            Some(None) => ui::print_disconnected(),
            Some(Some(Ok(transcript))) => ui::print_transcript(&transcript),
            Some(Some(Err(e))) => ui::print_error(&format!("Failed to load history: {e}")),
        }
    }

    fn show_error(&self, error: &ChatError) {
        let api_error = error.api_error();
        let cause = if api_error.is_transport() {
            format!(
                "{api_error}. Is the backend running at {}?",
                self.config.base_url
            )
        } else {
            api_error.to_string()
        };
        ui::print_banner(&error.to_string(), Some(&cause));
    }

    fn save_transcript(&self, path: Option<&str>) {
        let Some(path) = path else {
            ui::print_error("Usage: /save <file>");
            return;
        };
        match transcript::save(self.client.state(), Path::new(path)) {
            Ok(()) => ui::print_info(&format!("Transcript saved to {path}")),
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }

    fn pick_suggestion(&mut self, index: Option<usize>) -> Result<()> {
        let suggestions = self.client.state().latest_suggestions().to_vec();
        if suggestions.is_empty() {
            ui::print_error("No suggestions available");
            return Ok(());
        }

        let choice = match index {
            Some(n) => {
                let Some(choice) = suggestions.get(n - 1).cloned() else {
                    ui::print_error(&format!(
                        "No suggestion #{n} (there are {})",
                        suggestions.len()
                    ));
                    return Ok(());
                };
                choice
            }
            None => match Select::new("Suggested replies", suggestions).prompt() {
                Ok(choice) => choice,
                Err(e) if is_prompt_cancelled(&e) => return Ok(()),
                Err(e) => return Err(e.into()),
            },
        };

        self.client.select_suggestion(&choice);
        Ok(())
    }
}

/// Awaits `operation` unless `cancel` resolves first.
///
/// Dropping the operation abandons it mid-flight; callers put the chat state
/// back in order afterwards (`cancel_send`, `abort_connect`).
async fn until_cancelled<F, C>(operation: F, cancel: C) -> Option<F::Output>
where
    F: Future,
    C: Future,
{
    tokio::select! {
        biased;
        output = operation => Some(output),
        _ = cancel => None,
    }
}

/// Every network wait in the REPL goes through here. Once tokio owns SIGINT,
/// Ctrl+C outside the prompt only works where someone listens for it.
async fn interruptible<F: Future>(operation: F) -> Option<F::Output> {
    until_cancelled(operation, tokio::signal::ctrl_c()).await
}

fn help_line(view: &View<'_>) -> String {
    match (view.banner, view.connected) {
        (Some(banner), _) => format!("{banner} (/dismiss to hide)"),
        (None, true) => DEFAULT_HELP.to_string(),
        (None, false) => OFFLINE_HELP.to_string(),
    }
}

/// The prompt prefix doubles as the connection indicator.
fn prompt_render_config(phase: ConnectionPhase) -> RenderConfig<'static> {
    let prefix = match phase {
        ConnectionPhase::Connected => Styled::new("❯").with_fg(Color::LightBlue),
        ConnectionPhase::Connecting => Styled::new("…❯").with_fg(Color::LightYellow),
        ConnectionPhase::Disconnected => Styled::new("offline ❯").with_fg(Color::LightRed),
    }
    .with_attr(Attributes::BOLD);

    let mut render_config = RenderConfig::default()
        .with_prompt_prefix(prefix)
        .with_answered_prompt_prefix(prefix);

    // Non-highlighted suggestions: gray
    render_config.option = StyleSheet::new().with_fg(Color::Grey);
    // Highlighted suggestion: purple
    render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));
    render_config
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::BotReply;
    use crate::chat::ChatState;
    use crate::error::ApiError;
    use std::future::{pending, ready};

    fn connected() -> ChatState {
        let mut state = ChatState::new();
        state.session_created("abc123".to_string(), "Hello!");
        state
    }

    #[tokio::test]
    async fn test_until_cancelled_returns_output() {
        assert_eq!(until_cancelled(ready(7), pending::<()>()).await, Some(7));
    }

    #[tokio::test]
    async fn test_until_cancelled_abandons_stuck_operation() {
        assert_eq!(until_cancelled(pending::<u8>(), ready(())).await, None);
    }

    #[tokio::test]
    async fn test_cancelled_send_unblocks_state() {
        let mut state = connected();
        let pending_send = state.begin_send("hi").unwrap();

        let reply = until_cancelled(pending::<Result<BotReply, ApiError>>(), ready(())).await;
        assert!(reply.is_none());
        assert!(state.cancel_send());

        assert!(!state.is_loading());
        let late = BotReply {
            message: "late".to_string(),
            timestamp: "2025-01-01T10:00:00".to_string(),
            confidence: None,
            suggestions: None,
        };
        assert_eq!(
            state.complete_send(pending_send, Ok(late)).unwrap(),
            crate::chat::SendOutcome::Discarded
        );
    }

    #[test]
    fn test_help_line_tracks_connection_and_banner() {
        let state = connected();
        assert_eq!(help_line(&View::project(&state)), DEFAULT_HELP);

        let state = ChatState::new();
        assert_eq!(help_line(&View::project(&state)), OFFLINE_HELP);

        let mut state = connected();
        let pending_send = state.begin_send("hi").unwrap();
        let failure = ApiError::Status {
            url: "http://localhost/api/chat/message".to_string(),
            status: 500,
            body: String::new(),
        };
        let _ = state.complete_send(pending_send, Err(failure));
        assert_eq!(
            help_line(&View::project(&state)),
            "Failed to get response (/dismiss to hide)"
        );
    }

    #[test]
    fn test_prompt_prefix_marks_offline() {
        let offline = prompt_render_config(ConnectionPhase::Disconnected);
        assert!(offline.prompt_prefix.content.contains("offline"));

        let online = prompt_render_config(ConnectionPhase::Connected);
        assert!(!online.prompt_prefix.content.contains("offline"));
    }
}
