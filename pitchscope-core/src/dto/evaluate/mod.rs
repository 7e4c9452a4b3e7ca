//! Submission DTOs for the evaluation API

use serde::{Deserialize, Serialize};

/// Request to evaluate a startup idea
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Free-text description of the idea, as typed by the user
    pub raw_idea: String,
}

/// Response to an async submission: the handle to poll with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSubmission {
    pub job_id: String,
}
