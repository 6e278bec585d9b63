use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    PredictRequest, SimilarityResponse, content_type, is_json_content_type, log_preview,
};
use crate::gateway::state::HandlerState;

/// `POST /predict_similarity`.
///
/// The body is read as raw bytes, and a failed read is kept as a value, so
/// that every failure (oversized body, wrong content type, bad JSON) goes
/// through [`GatewayError`] instead of axum's plain-text rejections.
#[instrument(skip_all)]
pub async fn predict_similarity_handler(
    State(state): State<HandlerState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => predict_similarity(&state, &headers, &body).await,
        Err(rejection) => Err(GatewayError::BodyRead(rejection.body_text())),
    };

    match result {
        Ok(similarity_score) => {
            (StatusCode::OK, Json(SimilarityResponse { similarity_score })).into_response()
        }
        Err(GatewayError::EmptyInput) => {
            warn!("Empty input detected");
            GatewayError::EmptyInput.to_response(state.debug)
        }
        Err(err) => {
            error!(error = %err, "Error processing request");
            err.to_response(state.debug)
        }
    }
}

pub(crate) async fn predict_similarity(
    state: &HandlerState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<f64, GatewayError> {
    if !is_json_content_type(headers) {
        return Err(GatewayError::UnsupportedContentType(
            content_type(headers).unwrap_or("<none>").to_string(),
        ));
    }

    let request = PredictRequest::from_slice(body)?;
    request.validate()?;

    info!(
        text1 = %log_preview(&request.text1),
        text2 = %log_preview(&request.text2),
        "Received texts"
    );

    let scorer = Arc::clone(&state.scorer);
    let breakdown =
        tokio::task::spawn_blocking(move || scorer.score_pair(&request.text1, &request.text2))
            .await
            .map_err(|e| GatewayError::ScoringTaskFailed(e.to_string()))?;

    let score = breakdown.score();
    info!(
        score = score,
        degraded = breakdown.is_degraded(),
        "Similarity score computed"
    );

    Ok(score)
}
