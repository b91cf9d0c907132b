//! Read-only projection of [`ChatState`] for rendering.

use super::message::Message;
use super::state::{ChatState, ConnectionPhase};

/// One entry of the visible message list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bubble<'a> {
    Message(&'a Message),
    /// Placeholder shown while a reply is pending. Never part of the log.
    Typing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    pub bubbles: Vec<Bubble<'a>>,
    pub phase: ConnectionPhase,
    pub connected: bool,
    pub banner: Option<&'a str>,
    pub input: &'a str,
}

impl<'a> View<'a> {
    pub fn project(state: &'a ChatState) -> Self {
        let mut bubbles: Vec<Bubble<'a>> = state.messages().iter().map(Bubble::Message).collect();
        if state.is_loading() {
            bubbles.push(Bubble::Typing);
        }

        Self {
            bubbles,
            phase: state.phase(),
            connected: state.is_connected(),
            banner: state.error(),
            input: state.input(),
        }
    }

    pub fn is_typing(&self) -> bool {
        matches!(self.bubbles.last(), Some(Bubble::Typing))
    }
}
