#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly and
//! responds to basic commands without crashing.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs `logiq` against an empty config directory.
#[allow(deprecated)]
fn logiq(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("logiq").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("LOGIQ_API_BASE")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    logiq(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminal client for the LogiQ Gen AI assistant",
        ))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    logiq(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_chat_help() {
    let home = TempDir::new().unwrap();
    logiq(&home)
        .args(["chat", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive chat mode"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    logiq(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current settings"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_configure_show_reads_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("logiq");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[client]\nbase_url = \"http://localhost:8000\"\ntimeout_secs = 12\n",
    )
    .unwrap();

    logiq(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8000"))
        .stdout(predicate::str::contains("12"));
}

#[test]
fn test_empty_stdin_is_rejected() {
    let home = TempDir::new().unwrap();
    logiq(&home)
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No message to send"));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let home = TempDir::new().unwrap();
    logiq(&home)
        .args(["--base-url", "ftp://example.com"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));
}

#[test]
fn test_one_shot_prints_reply() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/chat/session/new")
        .with_status(200)
        .with_body(r#"{"session_id": "abc123"}"#)
        .create();
    server
        .mock("POST", "/api/chat/message")
        .with_status(200)
        .with_body(
            r#"{"message": "We offer AI solutions.", "timestamp": "2025-01-01T10:00:00", "confidence": 0.9}"#,
        )
        .create();
    let delete = server
        .mock("DELETE", "/api/chat/session/abc123")
        .with_status(200)
        .with_body("{}")
        .create();

    let home = TempDir::new().unwrap();
    logiq(&home)
        .env("LOGIQ_API_BASE", server.url())
        .arg("--quiet")
        .write_stdin("What services do you offer?")
        .assert()
        .success()
        .stdout(predicate::str::contains("We offer AI solutions."));

    delete.assert();
}

#[test]
fn test_one_shot_reports_backend_failure() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/chat/session/new")
        .with_status(500)
        .with_body(r#"{"detail": "Failed to create session"}"#)
        .create();

    let home = TempDir::new().unwrap();
    logiq(&home)
        .env("LOGIQ_API_BASE", server.url())
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to chatbot service"));
}

#[test]
fn test_health_against_mock_backend() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status": "healthy", "service": "LogiQ Gen Chatbot"}"#)
        .create();
    server
        .mock("GET", "/api/chat/stats")
        .with_status(200)
        .with_body(r#"{"active_sessions": 2, "system_status": "healthy"}"#)
        .create();

    let home = TempDir::new().unwrap();
    logiq(&home)
        .args(["health", "--base-url", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("healthy"));
}
