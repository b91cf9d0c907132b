//! Chat mode UI components.

use crate::api::SessionTranscript;
use crate::config::ResolvedConfig;
use crate::ui::Style;

use super::command::SLASH_COMMANDS;
use super::message::{Message, Sender};
use super::session::Session;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(base_url: &str) {
    println!(
        "{} {} - LogiQ Gen AI Assistant",
        Style::header("logiq"),
        Style::version(format!("v{VERSION}"))
    );
    println!("{}", Style::secondary(base_url));
    println!();
}

pub fn print_connected(session_id: &str) {
    println!(
        "{} Connected {}",
        Style::success("●"),
        Style::secondary(format!("(session {session_id})"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_message(message: &Message) {
    let speaker = match message.sender() {
        Sender::User => Style::user("You"),
        Sender::Bot if message.is_error() => Style::error("Bot"),
        Sender::Bot => Style::bot("Bot"),
    };
    println!("{speaker}: {}", message.content());

    if let Some(pct) = message.confidence_percent() {
        println!("  {}", Style::secondary(format!("confidence {pct}%")));
    }
    print_suggestions(message.suggestions());
    println!();
}

fn print_suggestions(suggestions: &[String]) {
    if suggestions.is_empty() {
        return;
    }
    let chips: Vec<String> = suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| Style::chip(format!("[{}] {s}", i + 1)))
        .collect();
    println!("  {}", chips.join("  "));
}

pub fn print_banner(message: &str, cause: Option<&str>) {
    eprintln!("{} {message}", Style::error("Error:"));
    if let Some(cause) = cause {
        eprintln!("  {}", Style::hint(cause));
    }
    eprintln!();
}

pub fn print_disconnected() {
    eprintln!(
        "{} Not connected. {}",
        Style::warning("Offline:"),
        Style::hint("Use /reset to try again.")
    );
    eprintln!();
}

pub fn print_config(config: &ResolvedConfig, session_id: Option<&str>) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}  {}",
        Style::label("base_url"),
        Style::value(&config.base_url)
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        Style::value(format_timeout(config))
    );
    println!(
        "  {}   {}",
        Style::label("session"),
        session_id.map_or_else(|| Style::secondary("(none)"), Style::value)
    );
    println!();
}

fn format_timeout(config: &ResolvedConfig) -> String {
    if config.timeout.is_zero() {
        "disabled".to_string()
    } else {
        format!("{}s", config.timeout.as_secs())
    }
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let width = SLASH_COMMANDS
        .iter()
        .map(|(cmd, _)| cmd.len())
        .max()
        .unwrap_or(0);
    for (cmd, desc) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:<width$}")),
            Style::secondary(desc)
        );
    }
    println!();
}

pub fn print_sessions(sessions: &[Session], active: Option<&str>) {
    println!("{}", Style::header("Conversations"));
    if sessions.is_empty() {
        println!("  {}", Style::secondary("(none)"));
    }
    for session in sessions {
        let marker = if Some(session.id()) == active {
            Style::success("*")
        } else {
            " ".to_string()
        };
        println!(
            "{marker} {}  {}",
            Style::value(session.title()),
            Style::secondary(format!(
                "started {}, last active {}",
                session.created_at().format("%Y-%m-%d %H:%M"),
                session.last_activity().format("%H:%M")
            ))
        );
        println!("    {}", Style::hint(session.preview()));
    }
    println!();
}

pub fn print_transcript(transcript: &SessionTranscript) {
    println!(
        "{} {}",
        Style::header("Server transcript"),
        Style::secondary(format!("({} messages)", transcript.total_messages))
    );
    for entry in &transcript.messages {
        let speaker = if entry.sender == Sender::User.as_str() {
            Style::user("You")
        } else {
            Style::bot("Bot")
        };
        println!(
            "  {} {speaker}: {}",
            Style::secondary(&entry.timestamp),
            entry.content
        );
    }
    println!();
}

pub fn print_info(message: &str) {
    println!("{} {message}", Style::success("✓"));
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
