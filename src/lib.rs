//! # logiq - LogiQ Gen chat client
//!
//! `logiq` is a terminal client for the LogiQ Gen conversational assistant.
//! It talks to the backend's session-oriented REST API: it opens a session,
//! exchanges messages in it, and deletes it again.
//!
//! ## Quick Start
//!
//! ```bash
//! # Ask a single question
//! echo "What services do you offer?" | logiq
//!
//! # Interactive chat mode
//! logiq chat
//!
//! # Point at a local backend
//! LOGIQ_API_BASE=http://localhost:8000 logiq chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/logiq/config.toml`:
//!
//! ```toml
//! [client]
//! base_url = "http://localhost:8000"
//! timeout_secs = 30
//! welcome_message = "Hello! How can I help you today?"
//! ```

/// Backend API client.
pub mod api;

/// Chat state, session lifecycle and interactive mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Error types.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
