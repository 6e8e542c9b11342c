//! Signature Verification Middleware

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use http_body_util::LengthLimitError;
use tracing::{debug, warn};

use super::error::AuthError;
use crate::api::AppState;

/// Header carrying the delivery timestamp (Unix seconds).
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";

/// Middleware to authenticate webhook deliveries.
///
/// Requires both signature headers, checks the timestamp against the replay
/// window, then verifies `timestamp || body` with the bot's public key. The
/// body is buffered once and handed on unchanged so the handler can still
/// read it.
///
/// # Usage
///
/// ```ignore
/// Router::new()
///     .route("/webhook", post(handle_webhook))
///     .layer(axum::middleware::from_fn_with_state(state, require_signature))
/// ```
pub async fn require_signature(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (Some(timestamp), Some(signature)) = (
        header_value(request.headers(), TIMESTAMP_HEADER),
        header_value(request.headers(), SIGNATURE_HEADER),
    ) else {
        warn!("Missing signature headers");
        return Err(AuthError::MissingHeaders);
    };

    state.replay_guard.validate(&timestamp).inspect_err(|e| {
        warn!(timestamp = %timestamp, error = %e, "Invalid webhook timestamp");
    })?;

    let (parts, body) = request.into_parts();
    let body = to_bytes(body, state.config.max_webhook_body_size)
        .await
        .map_err(|e| {
            let inner = e.into_inner();
            if inner.is::<LengthLimitError>() {
                warn!("Webhook body exceeds limit");
                AuthError::BodyTooLarge
            } else {
                warn!(error = %inner, "Failed to read webhook body");
                AuthError::BodyUnreadable
            }
        })?;

    state
        .signer
        .verify_signature(&timestamp, &body, &signature)
        .map_err(|e| {
            warn!(error = %e, "Webhook signature verification failed");
            AuthError::from(e)
        })?;

    debug!("Webhook signature verified");

    let request = Request::from_parts(parts, Body::from(body));
    Ok(next.run(request).await)
}

/// Non-empty header value as an owned string.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
