//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod evaluate;
mod health;
mod job;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an idea and wait for the analysis
    Evaluate {
        /// Idea text; read from stdin when neither this nor --file is given
        idea: Option<String>,

        /// Read the idea text from a file
        #[arg(long, conflicts_with = "idea")]
        file: Option<PathBuf>,

        /// Print the raw JSON result instead of the rendered report
        #[arg(long)]
        json: bool,
    },
    /// Submit an idea without waiting for the result
    Submit {
        /// Idea text
        idea: String,
    },
    /// Check the status of a submitted job
    Status {
        /// Job ID printed at submission
        job_id: String,
    },
    /// Delete a job on the backend
    Discard {
        /// Job ID printed at submission
        job_id: String,
    },
    /// Probe the backend health endpoint
    Health,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Evaluate { idea, file, json } => {
            evaluate::handle_evaluate(config, idea, file, json).await
        }
        Commands::Submit { idea } => job::handle_submit(config, &idea).await,
        Commands::Status { job_id } => job::handle_status(config, &job_id).await,
        Commands::Discard { job_id } => job::handle_discard(config, &job_id).await,
        Commands::Health => health::handle_health(config).await,
    }
}
