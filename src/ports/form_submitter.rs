//! Form submission port.
//!
//! Delivers a finished survey to the external form-collection endpoint.
//! Delivery is best-effort: callers log the outcome and move on.
//!
//! # Example
//!
//! ```ignore
//! match submitter.submit(&payload).await {
//!     Ok(()) => SubmissionOutcome::Delivered,
//!     Err(err) => SubmissionOutcome::Undelivered(err.to_string()),
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::survey::SurveySubmission;

/// Port for posting survey results to an external form.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// Posts the four survey fields once. No retries.
    async fn submit(&self, submission: &SurveySubmission) -> Result<(), SubmissionError>;
}

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("form endpoint rejected submission with status {0}")]
    Rejected(u16),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

/// What became of a best-effort submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Delivered,
    Undelivered(String),
}

impl SubmissionOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered)
    }
}

impl From<Result<(), SubmissionError>> for SubmissionOutcome {
    fn from(result: Result<(), SubmissionError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Delivered,
            Err(err) => SubmissionOutcome::Undelivered(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_result() {
        assert!(SubmissionOutcome::from(Ok(())).is_delivered());

        let outcome = SubmissionOutcome::from(Err(SubmissionError::Rejected(500)));
        assert_eq!(
            outcome,
            SubmissionOutcome::Undelivered(
                "form endpoint rejected submission with status 500".into()
            )
        );
        assert!(!outcome.is_delivered());
    }
}
