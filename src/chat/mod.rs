//! Chat sessions against the LogiQ Gen backend.
//!
//! [`ChatState`] holds the view state, [`ChatClient`] drives it against a
//! backend, and [`ChatRepl`] is the interactive terminal front end.

mod client;
/// Slash command parsing and autocomplete.
pub mod command;
mod message;
mod repl;
mod session;
mod state;
pub mod transcript;
mod ui;
mod view;

pub use client::{ChatClient, DEFAULT_WELCOME};
pub use message::{Message, MessageId, SEND_FAILURE_TEXT, Sender, parse_server_timestamp};
pub use repl::ChatRepl;
pub use session::{DEFAULT_TITLE, Session, preview};
pub use state::{
    ChatState, ConnectionPhase, MAX_MESSAGE_CHARS, PendingSend, SendOutcome, SkipReason,
};
pub use view::{Bubble, View};
