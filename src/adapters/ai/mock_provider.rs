//! Mock AI Provider for testing.
//!
//! Replays queued completions or errors in order and records every request,
//! so tests can assert on exactly what the interview and summarizer sent.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("ช่วยเล่าเพิ่มอีกนิดได้ไหม?")
//!     .with_error(MockError::Unavailable { message: "down".into() });
//!
//! let response = provider.complete(request).await?;
//! assert_eq!(provider.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo,
};

/// Mock AI provider for testing.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Queued responses, consumed front to back.
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Every request received, in order.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success { content: String },
    Error(MockError),
}

/// Mock error types for testing the degraded paths.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited,
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited => AIError::RateLimited,
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Poisoning only happens if a test panicked mid-call; the data is still usable.
fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful completion.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        locked(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
        });
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: MockError) -> Self {
        locked(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        locked(&self.calls).clone()
    }

    pub fn clear_calls(&self) {
        locked(&self.calls).clear();
    }

    fn next_response(&self) -> MockResponse {
        locked(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        locked(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success { content } => Ok(CompletionResponse {
                content,
                model: self.info.model.clone(),
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
