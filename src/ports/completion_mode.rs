//! Live or scripted completions, decided once at startup.

use std::sync::Arc;

use super::ai_provider::AIProvider;

/// How handlers obtain assistant text.
///
/// `Fallback` means no usable credential was configured: every reply comes
/// from the canned tables and no outbound call is made.
#[derive(Clone)]
pub enum CompletionMode {
    Live(Arc<dyn AIProvider>),
    Fallback,
}

impl CompletionMode {
    pub fn live(provider: Arc<dyn AIProvider>) -> Self {
        CompletionMode::Live(provider)
    }

    pub fn provider(&self) -> Option<&Arc<dyn AIProvider>> {
        match self {
            CompletionMode::Live(provider) => Some(provider),
            CompletionMode::Fallback => None,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, CompletionMode::Live(_))
    }

    /// `"live"` or `"fallback"`, as reported by the health endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            CompletionMode::Live(_) => "live",
            CompletionMode::Fallback => "fallback",
        }
    }
}

impl std::fmt::Debug for CompletionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionMode::Live(provider) => f
                .debug_tuple("Live")
                .field(&provider.provider_info())
                .finish(),
            CompletionMode::Fallback => f.write_str("Fallback"),
        }
    }
}
