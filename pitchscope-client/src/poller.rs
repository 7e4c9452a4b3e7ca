//! Job poller
//!
//! Polls the evaluation API for job status until a terminal state or the
//! deadline, whichever comes first. Each poll session produces exactly one
//! outcome: the interval and the deadline timer are both dropped on every
//! exit path, so a resolved session can never fire again.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::error::{ClientError, Result};
use pitchscope_core::domain::evaluation::EvaluationResult;
use pitchscope_core::domain::job::{JobState, JobStatus};

/// How often the poller queries job status
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How long the poller waits for a terminal state before giving up
pub const POLL_DEADLINE: Duration = Duration::from_secs(300);

/// Source of job status snapshots
///
/// Implemented by [`EvaluatorClient`](crate::EvaluatorClient) over HTTP;
/// the seam exists so poll behavior can be exercised against scripted
/// status sequences.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the current status of a job
    async fn status(&self, job_id: &str) -> Result<JobStatus>;
}

/// Progress signal emitted while a job has not reached a terminal state
///
/// Transient and non-authoritative: only useful for display, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollUpdate {
    /// The job is waiting for a worker
    Queued,
    /// A worker is evaluating the idea
    InProgress,
}

impl fmt::Display for PollUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollUpdate::Queued => write!(f, "Evaluation queued, waiting for a worker..."),
            PollUpdate::InProgress => write!(f, "Evaluation in progress..."),
        }
    }
}

/// Polls a job until it resolves, fails, or times out
pub struct JobPoller<S> {
    source: S,
    interval: Duration,
    deadline: Duration,
}

impl<S: StatusSource> JobPoller<S> {
    /// Creates a poller with the default cadence and deadline
    pub fn new(source: S) -> Self {
        Self::with_timing(source, POLL_INTERVAL, POLL_DEADLINE)
    }

    /// Creates a poller with custom timing
    ///
    /// # Arguments
    /// * `source` - Where status snapshots come from
    /// * `interval` - Time between consecutive status queries
    /// * `deadline` - Overall budget for the poll session
    pub fn with_timing(source: S, interval: Duration, deadline: Duration) -> Self {
        Self {
            source,
            interval,
            deadline,
        }
    }

    /// Polls until the job reaches a terminal state
    ///
    /// Status is queried once per interval, starting one interval after the
    /// call. Non-terminal states emit a [`PollUpdate`] through `on_update`.
    /// The session ends at the first terminal event: a `completed` status
    /// resolves with the attached result, a `failed` status rejects with the
    /// backend message (or a fallback when it is missing), a query error
    /// rejects immediately with no retry, and the deadline rejects with a
    /// timeout while cancelling the in-flight loop so no further queries
    /// are issued.
    ///
    /// # Arguments
    /// * `job_id` - The job to watch
    /// * `on_update` - Callback invoked with each progress signal
    pub async fn wait_for_result<F>(&self, job_id: &str, on_update: F) -> Result<EvaluationResult>
    where
        F: FnMut(PollUpdate),
    {
        match time::timeout(self.deadline, self.poll_until_terminal(job_id, on_update)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ClientError::EvaluationTimedOut {
                waited: self.deadline,
            }),
        }
    }

    /// The polling loop proper; runs until a terminal state or an error
    async fn poll_until_terminal<F>(&self, job_id: &str, mut on_update: F) -> Result<EvaluationResult>
    where
        F: FnMut(PollUpdate),
    {
        // First tick lands one full interval after poll start.
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let status = self.source.status(job_id).await?;
            debug!(job_id, state = ?status.status, "Polled job status");

            match status.status {
                JobState::Pending => on_update(PollUpdate::Queued),
                JobState::Processing => on_update(PollUpdate::InProgress),
                JobState::Completed => {
                    return status
                        .result
                        .ok_or_else(|| ClientError::MissingResult(job_id.to_string()));
                }
                JobState::Failed => {
                    return Err(ClientError::JobFailed(status.error.unwrap_or_else(|| {
                        "evaluation failed without an error message".to_string()
                    })));
                }
            }
        }
    }
}
