mod manager;

pub use manager::{
    ClientConfig, ConfigFile, ConfigManager, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
    ResolveOptions, ResolvedConfig, resolve_config, validate_base_url,
};
