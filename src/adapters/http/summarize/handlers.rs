//! HTTP handler for the summarize endpoint.

use axum::body::Bytes;
use axum::extract::{Json, State};

use crate::domain::summary::DEFAULT_SUMMARY;
use crate::ports::RequestMetadata;

use super::super::AppState;
use super::dto::{SummarizeRequest, SummarizeResponse};

/// POST /api/summarize - Digest of the interview or of legacy concerns
///
/// Always `200`. A body with neither list gets the default digest.
pub async fn summarize(State(state): State<AppState>, body: Bytes) -> Json<SummarizeResponse> {
    let summary = match SummarizeRequest::from_body(&body) {
        Some(input) => {
            state
                .summarizer
                .handle(input, RequestMetadata::detached())
                .await
        }
        None => {
            tracing::warn!("Summarize body carried no usable input");
            DEFAULT_SUMMARY.to_string()
        }
    };
    Json(SummarizeResponse { summary })
}
