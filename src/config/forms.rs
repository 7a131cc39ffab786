//! Form-collection endpoint configuration

use serde::Deserialize;
use std::time::Duration;

use super::ai::is_http_url;
use super::error::ValidationError;

/// Where finished surveys are posted and under which field names.
#[derive(Debug, Clone, Deserialize)]
pub struct FormsConfig {
    /// Form response URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_personal_rating_entry")]
    pub personal_rating_entry: String,

    #[serde(default = "default_team_rating_entry")]
    pub team_rating_entry: String,

    #[serde(default = "default_transcript_entry")]
    pub transcript_entry: String,

    #[serde(default = "default_summary_entry")]
    pub summary_entry: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl FormsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.endpoint) {
            return Err(ValidationError::InvalidUrl("forms.endpoint"));
        }
        let entries = [
            (&self.personal_rating_entry, "forms.personal_rating_entry"),
            (&self.team_rating_entry, "forms.team_rating_entry"),
            (&self.transcript_entry, "forms.transcript_entry"),
            (&self.summary_entry, "forms.summary_entry"),
        ];
        if let Some((_, name)) = entries.iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(ValidationError::MissingRequired(*name));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("forms.timeout_secs"));
        }
        Ok(())
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            personal_rating_entry: default_personal_rating_entry(),
            team_rating_entry: default_team_rating_entry(),
            transcript_entry: default_transcript_entry(),
            summary_entry: default_summary_entry(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://docs.google.com/forms/d/e/1FAIpQLSehVs7xAVEYRYy2jX0klWY-22Pc7M0sN14vPzr3SolT5H0O2A/formResponse"
        .to_string()
}

fn default_personal_rating_entry() -> String {
    "entry.621446036".to_string()
}

fn default_team_rating_entry() -> String {
    "entry.1650073458".to_string()
}

fn default_transcript_entry() -> String {
    "entry.674544202".to_string()
}

fn default_summary_entry() -> String {
    "entry.1902844599".to_string()
}

fn default_timeout() -> u64 {
    10
}
