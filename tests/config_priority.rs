//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments (including `LOGIQ_API_BASE`)
//! 2. Config file
//! 3. Built-in defaults

use std::time::Duration;

use logiq_chat::chat::DEFAULT_WELCOME;
use logiq_chat::config::{
    ClientConfig, ConfigFile, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ResolveOptions,
    resolve_config,
};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        client: ClientConfig {
            base_url: Some("http://config.local:8000".to_string()),
            timeout_secs: Some(45),
            welcome_message: Some("Welcome from config".to_string()),
        },
    }
}

#[test]
fn test_cli_base_url_overrides_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        base_url: Some("http://cli.local:9000".to_string()),
        timeout_secs: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.base_url, "http://cli.local:9000");
    // Unspecified options still come from the file
    assert_eq!(resolved.timeout, Duration::from_secs(45));
}

#[test]
fn test_config_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.base_url, "http://config.local:8000");
    assert_eq!(resolved.timeout, Duration::from_secs(45));
    assert_eq!(resolved.welcome_message, "Welcome from config");
}

#[test]
fn test_defaults_used_without_cli_or_config() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert_eq!(resolved.welcome_message, DEFAULT_WELCOME);
}

#[test]
fn test_cli_timeout_overrides_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        base_url: None,
        timeout_secs: Some(0),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    // Zero is a valid override meaning "no timeout"
    assert_eq!(resolved.timeout, Duration::ZERO);
}

#[test]
fn test_invalid_cli_base_url_returns_error() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        base_url: Some("localhost:8000".to_string()),
        timeout_secs: None,
    };

    assert!(resolve_config(&options, &config).is_err());
}

#[test]
fn test_invalid_config_base_url_returns_error() {
    let config = ConfigFile {
        client: ClientConfig {
            base_url: Some("ftp://config.local".to_string()),
            ..ClientConfig::default()
        },
    };

    assert!(resolve_config(&ResolveOptions::default(), &config).is_err());
}

#[test]
fn test_valid_cli_base_url_masks_invalid_config() {
    let config = ConfigFile {
        client: ClientConfig {
            base_url: Some("not a url".to_string()),
            ..ClientConfig::default()
        },
    };
    let options = ResolveOptions {
        base_url: Some("http://localhost:8000".to_string()),
        timeout_secs: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();
    assert_eq!(resolved.base_url, "http://localhost:8000");
}
