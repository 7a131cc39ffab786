//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Scripted mock for testing
//! - `OpenAIProvider` - OpenAI chat completions (gpt-4o-mini by default)

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};

use std::sync::Arc;

use crate::config::{AiConfig, CredentialState};
use crate::ports::{AIError, CompletionMode};

/// Resolves live or fallback mode once, from the configured credential.
///
/// # Errors
///
/// Only if a usable key is configured but the HTTP client cannot be built.
pub fn completion_mode_from_config(config: &AiConfig) -> Result<CompletionMode, AIError> {
    let Some(key) = config.api_key() else {
        let reason = match config.credential() {
            CredentialState::Placeholder => "placeholder key",
            _ => "no key",
        };
        tracing::info!(reason, "OpenAI credential unusable, serving scripted replies");
        return Ok(CompletionMode::Fallback);
    };

    let provider = OpenAIProvider::new(
        OpenAIConfig::from_secret(key.clone())
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout()),
    )?;
    tracing::info!(model = %config.model, "OpenAI credential configured, live completions enabled");
    Ok(CompletionMode::live(Arc::new(provider)))
}
