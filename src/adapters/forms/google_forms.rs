//! Google Forms submitter.
//!
//! Posts the survey as `application/x-www-form-urlencoded` to the form's
//! `formResponse` URL. Only the status is checked; the body is never read.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::FormsConfig;
use crate::domain::survey::SurveySubmission;
use crate::ports::{FormSubmitter, SubmissionError};

/// Entry IDs the form uses for each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub personal_rating: String,
    pub team_rating: String,
    pub transcript: String,
    pub summary: String,
}

impl From<&FormsConfig> for FormFields {
    fn from(config: &FormsConfig) -> Self {
        Self {
            personal_rating: config.personal_rating_entry.clone(),
            team_rating: config.team_rating_entry.clone(),
            transcript: config.transcript_entry.clone(),
            summary: config.summary_entry.clone(),
        }
    }
}

pub struct GoogleFormsSubmitter {
    endpoint: String,
    fields: FormFields,
    timeout: Duration,
    client: Client,
}

impl GoogleFormsSubmitter {
    pub fn new(
        endpoint: impl Into<String>,
        fields: FormFields,
        timeout: Duration,
    ) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmissionError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            fields,
            timeout,
            client,
        })
    }

    pub fn from_config(config: &FormsConfig) -> Result<Self, SubmissionError> {
        Self::new(config.endpoint.clone(), FormFields::from(config), config.timeout())
    }

    fn form_body(&self, submission: &SurveySubmission) -> Vec<(String, String)> {
        vec![
            (
                self.fields.personal_rating.clone(),
                submission.personal_rating.to_string(),
            ),
            (
                self.fields.team_rating.clone(),
                submission.team_rating.to_string(),
            ),
            (self.fields.transcript.clone(), submission.chat_history.clone()),
            (self.fields.summary.clone(), submission.chat_summary.clone()),
        ]
    }
}

#[async_trait]
impl FormSubmitter for GoogleFormsSubmitter {
    async fn submit(&self, submission: &SurveySubmission) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&self.form_body(submission))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmissionError::Timeout {
                        timeout_secs: self.timeout.as_secs(),
                    }
                } else {
                    SubmissionError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected(status.as_u16()))
        }
    }
}
