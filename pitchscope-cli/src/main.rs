//! Pitchscope CLI
//!
//! Terminal front end for the startup idea evaluation API: submit an idea,
//! watch the evaluation progress, and read the scored analysis.

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pitchscope")]
#[command(about = "Startup idea evaluator", long_about = None)]
struct Cli {
    /// Evaluation API URL
    #[arg(
        long,
        env = "PITCHSCOPE_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Library logs stay quiet unless RUST_LOG says otherwise.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitchscope_client=warn,pitchscope_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
    };

    handle_command(cli.command, &config).await
}
