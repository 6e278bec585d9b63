//! HTTP gateway (Axum).
//!
//! - `GET /` reports that the service is up.
//! - `POST /predict_similarity` scores a `{"text1", "text2"}` pair.
//!
//! CORS is permissive on every route. Bodies are capped at
//! [`MAX_BODY_BYTES`](crate::constants::MAX_BODY_BYTES); an oversized body is
//! a server error like any other unreadable request.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::constants::MAX_BODY_BYTES;

pub use error::GatewayError;
pub use handler::predict_similarity_handler;
pub use payload::{PredictRequest, SimilarityResponse, StatusResponse};
pub use state::HandlerState;

/// Body of `GET /`.
pub const RUNNING_STATUS: &str = "API is running";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/predict_similarity", post(predict_similarity_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: RUNNING_STATUS,
        }),
    )
        .into_response()
}
