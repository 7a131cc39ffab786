//! In-memory form submitter for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::survey::SurveySubmission;
use crate::ports::{FormSubmitter, SubmissionError};

/// Records submissions and optionally fails them.
#[derive(Debug, Clone, Default)]
pub struct MockFormSubmitter {
    submissions: Arc<Mutex<Vec<SurveySubmission>>>,
    failure: Option<SubmissionError>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockFormSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call records the payload, then returns this error.
    pub fn failing(error: SubmissionError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> Vec<SurveySubmission> {
        locked(&self.submissions).clone()
    }

    pub fn submission_count(&self) -> usize {
        locked(&self.submissions).len()
    }
}

#[async_trait]
impl FormSubmitter for MockFormSubmitter {
    async fn submit(&self, submission: &SurveySubmission) -> Result<(), SubmissionError> {
        locked(&self.submissions).push(submission.clone());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
