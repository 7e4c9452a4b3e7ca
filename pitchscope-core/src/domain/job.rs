//! Job tracking types

use serde::{Deserialize, Serialize};

use crate::domain::evaluation::EvaluationResult;

/// Lifecycle state of an evaluation job as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobState {
    /// Terminal states end polling; the job will never change again
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }
}

/// Status snapshot for a single evaluation job
///
/// `result` is present iff the state is `Completed`; `error` is only
/// meaningful when the state is `Failed`. Consumed transiently while
/// polling, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatus {
    /// Opaque identifier assigned by the backend at submission
    pub job_id: String,
    pub status: JobState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<EvaluationResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_tags_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&JobState::Processing).unwrap(),
            "\"processing\""
        );
        let state: JobState = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(state, JobState::Pending);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!JobState::Pending.is_terminal());
        assert!(!JobState::Processing.is_terminal());
        assert!(JobState::Completed.is_terminal());
        assert!(JobState::Failed.is_terminal());
    }

    #[test]
    fn test_status_without_optional_fields() {
        let json = r#"{"job_id": "j-42", "status": "processing"}"#;
        let status: JobStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.job_id, "j-42");
        assert_eq!(status.status, JobState::Processing);
        assert!(status.result.is_none());
        assert!(status.error.is_none());
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_failed_status_carries_error() {
        let json = r#"{"job_id": "j-42", "status": "failed", "error": "agent crashed"}"#;
        let status: JobStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_terminal());
        assert_eq!(status.error.as_deref(), Some("agent crashed"));
    }
}
