//! HTTP adapters - REST API for the survey page.
//!
//! # Routes
//! - `POST /api/chat` - One interview exchange
//! - `POST /api/summarize` - Digest of the interview
//! - `POST /api/submit` - Deliver the finished survey
//! - `GET /health` - Liveness and completion mode

pub mod chat;
mod health;
mod state;
pub mod summarize;
pub mod survey;

use axum::Router;
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use chat::chat_routes;
pub use health::{health, health_routes, HealthResponse};
pub use state::AppState;
pub use summarize::summarize_routes;
pub use survey::{survey_routes, ErrorResponse};

/// API routes without middleware, mounted under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(chat_routes())
                .merge(summarize_routes())
                .merge(survey_routes()),
        )
        .merge(health_routes())
}

/// Full application router with tracing, CORS and request timeout.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    api_router()
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Listed origins only; any origin when none are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::forms::MockFormSubmitter;
    use crate::domain::conversation::FALLBACK_REPLIES;
    use crate::domain::summary::{DEFAULT_SUMMARY, NO_DETAILS_SUMMARY};
    use crate::ports::{CompletionMode, SubmissionError};

    fn app_with(mode: CompletionMode, forms: MockFormSubmitter) -> Router {
        build_router(
            AppState::new(mode, Arc::new(forms)),
            &ServerConfig::default(),
        )
    }

    fn fallback_app() -> Router {
        app_with(CompletionMode::Fallback, MockFormSubmitter::new())
    }

    async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn chat_body(exchange: i64) -> String {
        json!({
            "messages": [
                {"role": "assistant", "content": "greeting"},
                {"role": "user", "content": "worried"}
            ],
            "surveyData": {"personalRating": 4, "teamRating": 2},
            "exchangeCount": exchange
        })
        .to_string()
    }

    #[tokio::test]
    async fn health_reports_mode() {
        let response = fallback_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.mode, "fallback");
    }

    #[tokio::test]
    async fn chat_uses_scripted_replies_without_credential() {
        let (status, body) = post_json(fallback_app(), "/api/chat", chat_body(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], FALLBACK_REPLIES[0]);
        assert_eq!(body["isComplete"], false);

        let (_, body) = post_json(fallback_app(), "/api/chat", chat_body(3)).await;
        assert_eq!(body["isComplete"], true);
    }

    #[tokio::test]
    async fn malformed_chat_body_gets_degraded_reply() {
        let (status, body) = post_json(fallback_app(), "/api/chat", "{oops".to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isComplete"], false);
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn chat_survives_provider_failure() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "down".into(),
        });
        let app = app_with(CompletionMode::live(Arc::new(provider)), MockFormSubmitter::new());
        let (status, body) = post_json(app, "/api/chat", chat_body(2)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isComplete"], false);
    }

    #[tokio::test]
    async fn summarize_greeting_only_has_no_details() {
        let body = json!({"conversation": [{"role": "assistant", "content": "greeting"}]});
        let (status, body) = post_json(fallback_app(), "/api/summarize", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], NO_DETAILS_SUMMARY);
    }

    #[tokio::test]
    async fn summarize_without_input_returns_default() {
        let (status, body) = post_json(fallback_app(), "/api/summarize", "[]".to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], DEFAULT_SUMMARY);
    }

    #[tokio::test]
    async fn submit_reports_delivery() {
        let forms = MockFormSubmitter::new();
        let app = app_with(CompletionMode::Fallback, forms.clone());
        let body = json!({
            "personalRating": 4, "teamRating": 2,
            "chatHistory": "AI: hi", "chatSummary": "digest"
        });
        let (status, body) = post_json(app, "/api/submit", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "complete", "delivered": true}));
        assert_eq!(forms.submission_count(), 1);
    }

    #[tokio::test]
    async fn submit_failure_still_completes() {
        let forms = MockFormSubmitter::failing(SubmissionError::Rejected(500));
        let app = app_with(CompletionMode::Fallback, forms);
        let body = json!({"personalRating": 1, "teamRating": 5});
        let (status, body) = post_json(app, "/api/submit", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["delivered"], false);
    }

    #[tokio::test]
    async fn submit_rejects_out_of_range_rating() {
        let forms = MockFormSubmitter::new();
        let app = app_with(CompletionMode::Fallback, forms.clone());
        let body = json!({"personalRating": 0, "teamRating": 2});
        let (status, body) = post_json(app, "/api/submit", body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(forms.submission_count(), 0);
    }

    #[tokio::test]
    async fn submit_rejects_unreadable_body() {
        let (status, body) = post_json(fallback_app(), "/api/submit", "{}".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[test]
    fn cors_accepts_configured_origins() {
        let _ = cors_layer(&["http://localhost:3000".to_string(), "bad\norigin".to_string()]);
        let _ = cors_layer(&[]);
    }
}
