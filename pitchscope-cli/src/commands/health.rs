//! Health command handler

use anyhow::{Context, Result};
use colored::*;
use pitchscope_client::EvaluatorClient;

use crate::config::Config;

/// Probe the backend and report whether it is reachable and healthy
pub async fn handle_health(config: &Config) -> Result<()> {
    let client = EvaluatorClient::new(&config.api_url);

    let health = client
        .health()
        .await
        .with_context(|| format!("Backend at {} is unreachable", config.api_url))?;

    if health.is_ok() {
        println!("{} Backend at {} is healthy", "✓".green(), config.api_url);
    } else {
        println!(
            "{} Backend reported status: {}",
            "⚠".yellow(),
            health.status.yellow()
        );
    }

    Ok(())
}
