//! Behaviour of the service with no completion credential configured.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pulse_check::adapters::forms::MockFormSubmitter;
use pulse_check::adapters::http::{build_router, AppState};
use pulse_check::config::ServerConfig;
use pulse_check::domain::conversation::{strip_marker, COMPLETION_MARKER, FALLBACK_REPLIES};
use pulse_check::domain::summary::{NO_DETAILS_SUMMARY, PAIR_CONNECTOR, LIST_SEPARATOR};
use pulse_check::ports::CompletionMode;

fn fallback_app() -> Router {
    build_router(
        AppState::new(CompletionMode::Fallback, Arc::new(MockFormSubmitter::new())),
        &ServerConfig::default(),
    )
}

async fn post(uri: &str, body: Value) -> Value {
    let response = fallback_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn chat_body(exchange: i64) -> Value {
    json!({
        "messages": [{"role": "user", "content": "worried"}],
        "surveyData": {"personalRating": 3, "teamRating": 3},
        "exchangeCount": exchange
    })
}

#[tokio::test]
async fn chat_follows_the_scripted_table() {
    for exchange in 1..=3_i64 {
        let reply = post("/api/chat", chat_body(exchange)).await;
        let entry = FALLBACK_REPLIES[(exchange - 1) as usize];
        let (expected, has_marker) = strip_marker(entry);

        assert_eq!(reply["message"], expected.as_str());
        assert_eq!(reply["isComplete"], exchange >= 3 || has_marker);
    }
}

#[tokio::test]
async fn marker_never_reaches_the_client() {
    for exchange in [-3_i64, 0, 1, 2, 3, 4, 50] {
        let reply = post("/api/chat", chat_body(exchange)).await;
        assert!(!reply["message"].as_str().unwrap().contains(COMPLETION_MARKER));
    }
}

#[tokio::test]
async fn non_positive_exchange_uses_first_entry() {
    let first = strip_marker(FALLBACK_REPLIES[0]).0;
    for exchange in [0_i64, -1, i64::MIN] {
        let reply = post("/api/chat", chat_body(exchange)).await;
        assert_eq!(reply["message"], first.as_str());
        assert_eq!(reply["isComplete"], false);
    }
}

#[tokio::test]
async fn identical_bodies_give_identical_output() {
    let chat = chat_body(2);
    assert_eq!(post("/api/chat", chat.clone()).await, post("/api/chat", chat).await);

    let concerns = json!({"concerns": ["slow rollout", "training cost"]});
    assert_eq!(
        post("/api/summarize", concerns.clone()).await,
        post("/api/summarize", concerns).await
    );
}

#[tokio::test]
async fn greeting_only_transcript_has_no_details() {
    let body = json!({"conversation": [{"role": "assistant", "content": "สวัสดี"}]});
    assert_eq!(post("/api/summarize", body).await["summary"], NO_DETAILS_SUMMARY);
}

#[tokio::test]
async fn concerns_are_joined_with_a_fixed_connector() {
    let body = json!({"concerns": ["slow rollout", "training cost"]});
    let summary = post("/api/summarize", body).await["summary"]
        .as_str()
        .unwrap()
        .to_string();

    assert!(summary.contains("slow rollout"));
    assert!(summary.contains("training cost"));
    assert!(
        summary.contains(&format!("slow rollout{LIST_SEPARATOR}training cost"))
            || summary.contains(&format!("slow rollout{PAIR_CONNECTOR}training cost"))
    );
}

#[tokio::test]
async fn partial_chat_body_still_closes_on_third_exchange() {
    let third = strip_marker(FALLBACK_REPLIES[2]).0;
    let bodies = [
        json!({"messages": [{"role": "user", "content": "x"}], "exchangeCount": 3}),
        json!({
            "messages": [{"role": "system", "content": "s"}, {"role": "user", "content": "x"}],
            "surveyData": {"personalRating": 2, "teamRating": 2},
            "exchangeCount": 3
        }),
    ];

    for body in bodies {
        let reply = post("/api/chat", body).await;
        assert_eq!(reply["message"], third.as_str());
        assert_eq!(reply["isComplete"], true);
    }
}
