//! Liveness probe.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub mode: String,
}

/// GET /health - Liveness plus the completion mode in effect
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        mode: state.mode.to_string(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
