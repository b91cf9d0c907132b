//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::Text;
use inquire::validator::Validation;

use crate::chat::DEFAULT_WELCOME;
use crate::config::{
    ClientConfig, ConfigFile, ConfigManager, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
    validate_base_url,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the config file's settings; otherwise prompts for
/// each setting and saves the result.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    if show {
        let config = manager.load_or_default()?;
        print_current_settings(&config, &manager);
        return Ok(());
    }
    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_current_settings(&config, manager);

    let base_url = prompt_base_url(config.client.base_url.as_deref())?;
    let timeout_secs = prompt_timeout(config.client.timeout_secs)?;
    let welcome_message = prompt_welcome(config.client.welcome_message.as_deref())?;

    config.client = ClientConfig {
        base_url: Some(base_url),
        timeout_secs: Some(timeout_secs),
        welcome_message,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_settings(config: &ConfigFile, manager: &ConfigManager) {
    println!(
        "{} {}",
        Style::header("Current settings"),
        Style::secondary(manager.config_path().display().to_string())
    );
    println!(
        "  {}         {}",
        Style::label("base_url"),
        config
            .client
            .base_url
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("timeout_secs"),
        config
            .client
            .timeout_secs
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("welcome_message"),
        config
            .client
            .welcome_message
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn prompt_base_url(current: Option<&str>) -> Result<String> {
    let base_url = Text::new("Backend base URL:")
        .with_default(current.unwrap_or(DEFAULT_BASE_URL))
        .with_help_message("Server root, e.g. http://localhost:8000")
        .with_validator(|input: &str| {
            Ok(match validate_base_url(input.trim()) {
                Ok(()) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;

    Ok(base_url.trim().trim_end_matches('/').to_string())
}

fn prompt_timeout(current: Option<u64>) -> Result<u64> {
    let default = current.unwrap_or(DEFAULT_TIMEOUT_SECS).to_string();
    let input = Text::new("Request timeout (seconds):")
        .with_default(&default)
        .with_help_message("0 disables the timeout")
        .prompt()?;

    match input.trim().parse::<u64>() {
        Ok(secs) => Ok(secs),
        Err(_) => bail!("Invalid timeout: '{}'", input.trim()),
    }
}

fn prompt_welcome(current: Option<&str>) -> Result<Option<String>> {
    let input = Text::new("Welcome message:")
        .with_default(current.unwrap_or(DEFAULT_WELCOME))
        .prompt()?;

    let input = input.trim();
    if input.is_empty() || input == DEFAULT_WELCOME {
        Ok(None)
    } else {
        Ok(Some(input.to_string()))
    }
}
