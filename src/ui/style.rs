//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper falls
//! back to plain text when colors are disabled.

use owo_colors::{OwoColorize, Style as Paint};
use std::fmt::Display;

use crate::output;

fn paint<T: Display>(text: T, style: Paint) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        format!("{}", text.style(style))
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, Paint::new().bold())
    }

    /// Labels/keys (e.g., "base_url", "timeout")
    pub fn label<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }

    /// Primary values
    pub fn value<T: Display>(text: T) -> String {
        paint(text, Paint::new().cyan())
    }

    /// Secondary/supplementary info (e.g., URLs, timestamps)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, Paint::new().green())
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, Paint::new().red().bold())
    }

    pub fn warning<T: Display>(text: T) -> String {
        paint(text, Paint::new().yellow())
    }

    /// Slash commands (e.g., "/reset", "/help")
    pub fn command<T: Display>(text: T) -> String {
        paint(text, Paint::new().green())
    }

    /// Hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed().italic())
    }

    /// Speaker label for messages typed by the user.
    pub fn user<T: Display>(text: T) -> String {
        paint(text, Paint::new().blue().bold())
    }

    /// Speaker label for assistant replies.
    pub fn bot<T: Display>(text: T) -> String {
        paint(text, Paint::new().magenta().bold())
    }

    /// Suggestion chips.
    pub fn chip<T: Display>(text: T) -> String {
        paint(text, Paint::new().yellow())
    }

    pub fn version<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }
}
