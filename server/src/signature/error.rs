//! Signature Authentication Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nitro_crypto::CryptoError;
use thiserror::Error;

use crate::error::ErrorResponse;

/// Errors raised by the webhook signature gate.
///
/// Every variant except the body errors is a `401`; the platform must never
/// see a delivery accepted without both a fresh timestamp and a valid signature.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// `X-Signature-Timestamp` or `X-Signature-Ed25519` is absent or empty.
    #[error("Missing signature headers")]
    MissingHeaders,

    /// Timestamp header is not a Unix timestamp in seconds.
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// Timestamp is outside the replay window.
    #[error("Timestamp expired")]
    TimestampExpired,

    /// Signature header is not 64 bytes of hex.
    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    /// Signature does not verify against our public key.
    #[error("Signature verification failed")]
    SignatureMismatch,

    /// Request body exceeds the configured limit.
    #[error("Request body too large")]
    BodyTooLarge,

    /// Request body could not be read.
    #[error("Failed to read request body")]
    BodyUnreadable,
}

impl From<CryptoError> for AuthError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::MalformedSignature(reason) => Self::MalformedSignature(reason),
            CryptoError::SignatureMismatch | CryptoError::InvalidSecret => Self::SignatureMismatch,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::MissingHeaders => (StatusCode::UNAUTHORIZED, "MISSING_SIGNATURE"),
            Self::MalformedTimestamp(_) | Self::TimestampExpired => {
                (StatusCode::UNAUTHORIZED, "INVALID_TIMESTAMP")
            }
            Self::MalformedSignature(_) | Self::SignatureMismatch => {
                (StatusCode::UNAUTHORIZED, "INVALID_SIGNATURE")
            }
            Self::BodyTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            Self::BodyUnreadable => (StatusCode::BAD_REQUEST, "INVALID_BODY"),
        };

        (status, Json(ErrorResponse::new(code, self.to_string()))).into_response()
    }
}
