//! Evaluation API endpoints

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::EvaluatorClient;
use crate::error::{ClientError, Result};
use crate::poller::{JobPoller, PollUpdate, StatusSource};
use pitchscope_core::domain::evaluation::EvaluationResult;
use pitchscope_core::domain::job::JobStatus;
use pitchscope_core::dto::evaluate::{EvaluateRequest, JobSubmission};
use pitchscope_core::dto::health::HealthStatus;

impl EvaluatorClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submit an idea for asynchronous evaluation
    ///
    /// Rejects an empty or whitespace-only idea client-side, before any
    /// network traffic.
    ///
    /// # Arguments
    /// * `req` - The submission request
    ///
    /// # Returns
    /// The job handle to poll with
    ///
    /// # Example
    /// ```no_run
    /// # use pitchscope_client::EvaluatorClient;
    /// # use pitchscope_core::dto::evaluate::EvaluateRequest;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = EvaluatorClient::new("http://localhost:8000");
    /// let submission = client.submit_idea(EvaluateRequest {
    ///     raw_idea: "A marketplace for renting cameras peer-to-peer".to_string(),
    /// }).await?;
    /// println!("Submitted as job {}", submission.job_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_idea(&self, req: EvaluateRequest) -> Result<JobSubmission> {
        if req.raw_idea.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "idea text cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/evaluate/async", self.base_url);
        debug!(%url, "Submitting idea for evaluation");
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Get the status of an evaluation job
    ///
    /// # Arguments
    /// * `job_id` - The opaque job identifier returned at submission
    ///
    /// # Returns
    /// The current status snapshot
    pub async fn job_status(&self, job_id: &str) -> Result<JobStatus> {
        let url = format!("{}/evaluate/status/{}", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Delete a finished job on the backend
    ///
    /// # Arguments
    /// * `job_id` - The job to delete
    pub async fn delete_job(&self, job_id: &str) -> Result<()> {
        let url = format!("{}/jobs/{}", self.base_url, job_id);
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }

    // =============================================================================
    // High-level Flow
    // =============================================================================

    /// Evaluate an idea end to end: submit, poll to a terminal outcome,
    /// then clean the job up
    ///
    /// Progress signals are delivered through `on_update` while the job is
    /// queued or running. Cleanup is best-effort: deletion failures are
    /// logged and swallowed, they never affect the outcome.
    ///
    /// # Arguments
    /// * `raw_idea` - Free-text idea description
    /// * `on_update` - Callback invoked with each progress signal
    ///
    /// # Returns
    /// The evaluation result, or the first terminal error
    pub async fn evaluate<F>(&self, raw_idea: &str, on_update: F) -> Result<EvaluationResult>
    where
        F: FnMut(PollUpdate),
    {
        let submission = self
            .submit_idea(EvaluateRequest {
                raw_idea: raw_idea.to_string(),
            })
            .await?;

        debug!(job_id = %submission.job_id, "Idea submitted, polling for result");

        let poller = JobPoller::new(self.clone());
        let outcome = poller.wait_for_result(&submission.job_id, on_update).await;

        if let Err(e) = self.delete_job(&submission.job_id).await {
            warn!(job_id = %submission.job_id, "Failed to clean up job: {}", e);
        }

        outcome
    }

    // =============================================================================
    // Health
    // =============================================================================

    /// Probe the backend health endpoint
    ///
    /// # Returns
    /// The reported health status
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl StatusSource for EvaluatorClient {
    async fn status(&self, job_id: &str) -> Result<JobStatus> {
        self.job_status(job_id).await
    }
}
