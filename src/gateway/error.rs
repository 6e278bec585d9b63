use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned for every 500, whatever the cause.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error. Please try again later.";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Both 'text1' and 'text2' must be non-empty strings.")]
    EmptyInput,

    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("expected an application/json body, got content type '{0}'")]
    UnsupportedContentType(String),

    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("scoring task failed: {0}")]
    ScoringTaskFailed(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::EmptyInput => StatusCode::BAD_REQUEST,
            GatewayError::BodyRead(_)
            | GatewayError::UnsupportedContentType(_)
            | GatewayError::MalformedBody(_)
            | GatewayError::ScoringTaskFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the HTTP response. Server errors carry an opaque message;
    /// `verbose` adds the underlying cause as `detail`.
    pub fn to_response(&self, verbose: bool) -> Response {
        let status = self.status_code();

        let body = if status.is_server_error() {
            ErrorResponse {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
                detail: verbose.then(|| self.to_string()),
            }
        } else {
            ErrorResponse {
                error: self.to_string(),
                detail: None,
            }
        };

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        self.to_response(false)
    }
}
