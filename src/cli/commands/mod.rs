//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// One-shot message handler (no subcommand).
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Backend health check handler.
pub mod health;

/// Loads the config file and merges the CLI overrides into it.
pub fn load_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(options, &file_config)
}
