//! Webhook Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::registry::EventError;
use super::types::PayloadError;
use crate::error::ErrorResponse;

/// Errors surfaced to the platform as a non-200 response.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The body is not a JSON envelope.
    #[error("Invalid JSON payload")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// The handshake payload has the wrong shape.
    #[error("Invalid verification payload")]
    InvalidChallenge(#[source] PayloadError),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::InvalidEnvelope(_) => (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD"),
            Self::InvalidChallenge(_) => (StatusCode::BAD_REQUEST, "INVALID_VERIFICATION"),
        };

        (status, Json(ErrorResponse::new(code, self.to_string()))).into_response()
    }
}

/// Failures on the event path. These are logged and acknowledged with `200`,
/// because the platform retries any other status.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid event payload: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    #[error(transparent)]
    Handler(#[from] EventError),
}
