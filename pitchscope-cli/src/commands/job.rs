//! Job command handlers
//!
//! Handles fire-and-forget submission, one-shot status checks, and explicit
//! job deletion.

use anyhow::{Context, Result};
use colored::*;
use pitchscope_client::EvaluatorClient;
use pitchscope_core::domain::job::JobState;
use pitchscope_core::dto::evaluate::EvaluateRequest;

use crate::config::Config;
use crate::render;

/// Submit an idea and print the job handle
pub async fn handle_submit(config: &Config, idea: &str) -> Result<()> {
    let client = EvaluatorClient::new(&config.api_url);

    let submission = client
        .submit_idea(EvaluateRequest {
            raw_idea: idea.to_string(),
        })
        .await?;

    println!("{} Idea submitted", "✓".green());
    println!("  Job ID: {}", submission.job_id.cyan());
    println!(
        "{}",
        format!("  Check progress with: pitchscope status {}", submission.job_id).dimmed()
    );

    Ok(())
}

/// Query and display the status of a single job
pub async fn handle_status(config: &Config, job_id: &str) -> Result<()> {
    let client = EvaluatorClient::new(&config.api_url);

    let status = client.job_status(job_id).await?;

    println!("{}", "Job Status:".bold());
    println!("  ID:     {}", status.job_id.cyan());
    println!("  State:  {}", render::colorize_state(&status.status));

    match status.status {
        JobState::Completed => {
            if let Some(result) = &status.result {
                println!();
                render::print_result(result);
            }
        }
        JobState::Failed => {
            let message = status
                .error
                .as_deref()
                .unwrap_or("evaluation failed without an error message");
            println!("  Error:  {}", message.red());
        }
        JobState::Pending | JobState::Processing => {
            println!("{}", "  Still running; check again shortly.".dimmed());
        }
    }

    Ok(())
}

/// Delete a job on the backend
///
/// Unlike the automatic cleanup after an evaluation, this user-initiated
/// deletion does surface failures.
pub async fn handle_discard(config: &Config, job_id: &str) -> Result<()> {
    let client = EvaluatorClient::new(&config.api_url);

    client
        .delete_job(job_id)
        .await
        .with_context(|| format!("Failed to delete job {}", job_id))?;

    println!("{} Job {} deleted", "✓".green(), job_id.cyan());

    Ok(())
}
