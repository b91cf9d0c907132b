use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::chat::DEFAULT_WELCOME;
use crate::paths;

/// Server root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://logiq-gen-assistant-1.onrender.com";

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings in the `[client]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server root of the chat backend.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds; `0` disables it.
    pub timeout_secs: Option<u64>,
    /// Greeting shown at the top of every new conversation.
    pub welcome_message: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/logiq/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub client: ClientConfig,
}

/// Configuration after merging CLI arguments, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub welcome_message: String,
}

/// CLI overrides that take precedence over config file values.
///
/// `base_url` also carries `LOGIQ_API_BASE`, which clap folds into the flag.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration: CLI/env first, then the config file, then
/// built-in defaults.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let base_url = options
        .base_url
        .as_deref()
        .or(config_file.client.base_url.as_deref())
        .unwrap_or(DEFAULT_BASE_URL);
    validate_base_url(base_url)?;

    let timeout_secs = options
        .timeout_secs
        .or(config_file.client.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let welcome_message = config_file
        .client
        .welcome_message
        .as_deref()
        .filter(|w| !w.trim().is_empty())
        .unwrap_or(DEFAULT_WELCOME)
        .to_string();

    Ok(ResolvedConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        timeout: Duration::from_secs(timeout_secs),
        welcome_message,
    })
}

/// Accepts absolute `http`/`https` URLs only.
pub fn validate_base_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw).with_context(|| format!("Invalid base URL: '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid base URL: '{raw}'\n\n\
             The base URL must start with http:// or https://"
        );
    }
    Ok(())
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `$XDG_CONFIG_HOME/logiq/config.toml`
    /// (or `~/.config/logiq/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file; a missing file means defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }
        self.load()
    }
}
