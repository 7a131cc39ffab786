//! SummarizeHandler - Condenses an interview into a short digest.
//!
//! Always returns a string. Empty input short-circuits, fallback mode and
//! gateway failures use the canned digests.

use crate::domain::summary::{
    failure_digest, summary_prompt, unconfigured_digest, SummaryInput, DEFAULT_SUMMARY,
    NO_DETAILS_SUMMARY,
};
use crate::ports::{CompletionMode, CompletionRequest, MessageRole, RequestMetadata};

pub const SUMMARY_MAX_TOKENS: u32 = 500;
pub const SUMMARY_TEMPERATURE: f32 = 0.3;

pub struct SummarizeHandler {
    mode: CompletionMode,
}

impl SummarizeHandler {
    pub fn new(mode: CompletionMode) -> Self {
        Self { mode }
    }

    pub async fn handle(&self, input: SummaryInput, metadata: RequestMetadata) -> String {
        if input.is_empty() {
            tracing::debug!(kind = input.kind(), "Nothing to summarize");
            return NO_DETAILS_SUMMARY.to_string();
        }

        let Some(provider) = self.mode.provider() else {
            return unconfigured_digest(&input);
        };

        let request = CompletionRequest::new(metadata.clone())
            .with_message(MessageRole::User, summary_prompt(&input))
            .with_max_tokens(SUMMARY_MAX_TOKENS)
            .with_temperature(SUMMARY_TEMPERATURE);

        tracing::debug!(
            trace_id = %metadata.trace_id,
            kind = input.kind(),
            contributions = input.contributions().len(),
            "Requesting summary"
        );

        match provider.complete(request).await {
            Ok(response) => {
                let summary = response.content.trim();
                if summary.is_empty() {
                    DEFAULT_SUMMARY.to_string()
                } else {
                    summary.to_string()
                }
            }
            Err(err) => {
                tracing::warn!(
                    trace_id = %metadata.trace_id,
                    error_kind = err.kind(),
                    error = %err,
                    "Summary completion failed, using literal digest"
                );
                failure_digest(&input)
            }
        }
    }
}
