use anyhow::{Context, Result};

use super::load_config;
use crate::api::ApiClient;
use crate::config::ResolveOptions;
use crate::ui::{Spinner, Style};

/// Prints the backend's health status and, when available, its statistics.
pub async fn run_health(options: ResolveOptions) -> Result<()> {
    let config = load_config(&options)?;
    let api = ApiClient::new(&config.base_url, config.timeout)?;

    let spinner = Spinner::new("Checking backend...");
    let health = api.health().await;
    let stats = api.stats().await;
    spinner.stop();

    let health = health.with_context(|| format!("Backend at {} is unreachable", api.base_url()))?;

    println!("{}", Style::header("Backend"));
    println!("  {}        {}", Style::label("url"), Style::secondary(api.base_url()));
    println!("  {}     {}", Style::label("status"), Style::value(&health.status));
    if let Some(service) = &health.service {
        println!("  {}    {}", Style::label("service"), Style::value(service));
    }

    match stats {
        Ok(stats) => {
            println!(
                "  {}   {}",
                Style::label("sessions"),
                Style::value(stats.active_sessions)
            );
        }
        Err(e) => {
            tracing::info!(error = %e, "stats unavailable");
            println!(
                "  {}   {}",
                Style::label("sessions"),
                Style::secondary("(unavailable)")
            );
        }
    }

    Ok(())
}
