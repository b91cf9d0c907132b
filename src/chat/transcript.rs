//! Markdown export of the message log (`/save`).

use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

use super::message::{Message, Sender};
use super::state::ChatState;
use crate::fs::atomic_write;

/// Renders the active log as Markdown.
pub fn render_markdown(state: &ChatState) -> String {
    let mut out = String::from("# Chat transcript\n\n");
    if let Some(id) = state.session_id() {
        let _ = writeln!(out, "Session: `{id}`\n");
    }
    for message in state.messages() {
        write_message(&mut out, message);
    }
    out
}

fn write_message(out: &mut String, message: &Message) {
    let speaker = match message.sender() {
        Sender::User => "You",
        Sender::Bot => "Assistant",
    };
    let _ = write!(
        out,
        "**{speaker}** _{}_",
        message.timestamp().format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(pct) = message.confidence_percent() {
        let _ = write!(out, " (confidence {pct}%)");
    }
    if message.is_error() {
        out.push_str(" (error)");
    }
    let _ = writeln!(out, "\n\n{}\n", message.content());

    if !message.suggestions().is_empty() {
        out.push_str("Suggestions:\n");
        for s in message.suggestions() {
            let _ = writeln!(out, "- {s}");
        }
        out.push('\n');
    }
}

/// Writes the transcript to `path` atomically.
pub fn save(state: &ChatState, path: &Path) -> Result<()> {
    atomic_write(path, &render_markdown(state))
}
