//! OpenAI Provider - Implementation of AIProvider for OpenAI's chat API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```
//!
//! One POST per call. Failures are mapped to `AIError` and never retried;
//! the interview substitutes canned text instead.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, MessageRole,
    ProviderInfo,
};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API, without the trailing `/chat/completions`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_secret(Secret::new(api_key.into()))
    }

    pub fn from_secret(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a provider with its own HTTP client.
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to OpenAI's format. The system prompt goes first.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let system = request.system_prompt.iter().map(|prompt| OpenAIMessage {
            role: "system".to_string(),
            content: prompt.clone(),
        });

        let history = request.messages.iter().map(|msg| OpenAIMessage {
            role: match msg.role {
                MessageRole::System => "system",
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
            }
            .to_string(),
            content: msg.content.clone(),
        });

        OpenAIRequest {
            model: self.config.model.clone(),
            messages: system.chain(history).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&self.to_openai_request(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses to errors.
    async fn handle_response_status(response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(AIError::AuthenticationFailed),
            429 => Err(AIError::RateLimited),
            400 => Err(AIError::InvalidRequest(error_body)),
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    async fn parse_response(response: Response) -> Result<CompletionResponse, AIError> {
        let response = Self::handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            model: openai_response.model,
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );
        let response = self.send_request(&request).await?;
        Self::parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", &self.config.model)
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    model: String,
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Message, RequestMetadata};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> OpenAIProvider {
        OpenAIProvider::new(OpenAIConfig::new("sk-test").with_base_url(server.uri())).unwrap()
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::detached())
            .with_system_prompt("interviewer")
            .with_message(MessageRole::Assistant, "hello")
            .with_message(MessageRole::User, "worried")
            .with_max_tokens(500)
            .with_temperature(0.7)
    }

    fn completion(content: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": content}, "finish_reason": "stop"}]
        }))
    }

    #[test]
    fn config_defaults_to_mini_model() {
        let config = OpenAIConfig::new("k");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), "k");
    }

    #[test]
    fn system_prompt_leads_the_messages() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("k")).unwrap();
        let body = provider.to_openai_request(&request());
        let roles: Vec<_> = body.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "assistant", "user"]);
        assert_eq!(body.max_tokens, Some(500));
    }

    #[tokio::test]
    async fn complete_posts_chat_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "max_tokens": 500,
                "messages": [{"role": "system", "content": "interviewer"}]
            })))
            .respond_with(completion(json!("tell me more")))
            .expect(1)
            .mount(&server)
            .await;

        let response = provider(&server).complete(request()).await.unwrap();
        assert_eq!(response.content, "tell me more");
        assert_eq!(response.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn null_content_reads_as_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion(serde_json::Value::Null))
            .mount(&server)
            .await;

        let response = provider(&server).complete(request()).await.unwrap();
        assert_eq!(response.content, "");
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(1)
            .mount(&server)
            .await;

        let err = provider(&server).complete(request()).await.unwrap_err();
        assert!(matches!(err, AIError::RateLimited));
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = provider(&server).complete(request()).await.unwrap_err();
        assert!(matches!(err, AIError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = provider(&server).complete(request()).await.unwrap_err();
        assert!(matches!(err, AIError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn empty_choices_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = provider(&server).complete(request()).await.unwrap_err();
        assert!(matches!(err, AIError::Parse(_)));
    }

    #[test]
    fn history_messages_keep_content() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("k")).unwrap();
        let mut req = request();
        req.messages.push(Message::user("again"));
        let body = provider.to_openai_request(&req);
        assert_eq!(body.messages.last().map(|m| m.content.as_str()), Some("again"));
    }
}
