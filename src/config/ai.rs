//! Completion gateway configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Value shipped in the sample `.env`; treated as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";

/// Completion gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key. Absent, blank or placeholder means fallback mode.
    pub openai_api_key: Option<Secret<String>>,

    /// Chat model
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// What the configured key amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    Configured,
    Missing,
    Placeholder,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolves the key into live or one of the fallback reasons.
    pub fn credential(&self) -> CredentialState {
        match self.openai_api_key.as_ref().map(|k| k.expose_secret().trim()) {
            None | Some("") => CredentialState::Missing,
            Some(key) if key.contains(PLACEHOLDER_API_KEY) => CredentialState::Placeholder,
            Some(_) => CredentialState::Configured,
        }
    }

    /// The key, only when it is usable.
    pub fn api_key(&self) -> Option<&Secret<String>> {
        match self.credential() {
            CredentialState::Configured => self.openai_api_key.as_ref(),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ai.model"));
        }
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("ai.base_url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("ai.timeout_secs"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: &str) -> AiConfig {
        AiConfig {
            openai_api_key: Some(Secret::new(key.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.credential(), CredentialState::Missing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_key_is_missing() {
        assert_eq!(with_key("   ").credential(), CredentialState::Missing);
    }

    #[test]
    fn test_placeholder_key_is_not_usable() {
        let config = with_key("sk-your_openai_api_key_here");
        assert_eq!(config.credential(), CredentialState::Placeholder);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_real_key_is_configured() {
        let config = with_key("sk-live-123");
        assert_eq!(config.credential(), CredentialState::Configured);
        assert_eq!(config.api_key().map(|k| k.expose_secret().as_str()), Some("sk-live-123"));
    }

    #[test]
    fn test_key_is_redacted_in_debug() {
        let rendered = format!("{:?}", with_key("sk-live-123"));
        assert!(!rendered.contains("sk-live-123"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = AiConfig {
            base_url: "api.openai.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUrl("ai.base_url")));

        let config = AiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
