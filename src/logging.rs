//! Diagnostic logging setup.
//!
//! Diagnostics are `tracing` events written to stderr so they never mix with
//! replies printed on stdout. `RUST_LOG` always wins over the `-v` flags.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!crate::output::is_no_color())
        .try_init();
}
