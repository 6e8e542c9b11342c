//! Webhook Handler
//!
//! Routes an authenticated delivery by opcode: the callback-verify handshake
//! is answered synchronously, events are handed to the registered
//! [`EventHandler`] and always acknowledged.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use nitro_crypto::Signer;
use tracing::{debug, error, info, instrument, warn};

use super::error::{DispatchError, WebhookError};
use super::registry::EventHandler;
use super::types::{
    Envelope, EventEnvelope, Opcode, PayloadError, VerificationChallenge, VerificationResponse,
};
use crate::api::AppState;

/// `POST /webhook`.
///
/// Runs behind [`require_signature`](crate::signature::require_signature), so
/// the body is already authenticated. Only a malformed envelope or a bad
/// handshake payload produce a non-200 response.
#[instrument(skip_all)]
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, WebhookError> {
    let envelope: Envelope = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Failed to parse webhook envelope");
        WebhookError::InvalidEnvelope(e)
    })?;

    info!(
        op = %envelope.op,
        event_type = %envelope.t,
        id = %envelope.id,
        "Webhook payload received"
    );

    match envelope.op {
        Opcode::CallbackVerify => {
            let response = handle_verification(&state.signer, &envelope)?;
            Ok(Json(response).into_response())
        }
        Opcode::Dispatch => Ok(acknowledge(
            dispatch_event(state.events.as_ref(), &envelope).await,
        )),
        Opcode::Other(op) => {
            warn!(op, "Unsupported opcode");
            Ok(acknowledge(Ok(())))
        }
    }
}

/// Answer the callback-verify handshake (`op = 13`).
///
/// A missing `d` or missing fields are signed as empty strings; only a `d` of
/// the wrong shape is rejected.
pub fn handle_verification(
    signer: &Signer,
    envelope: &Envelope,
) -> Result<VerificationResponse, WebhookError> {
    let challenge = match envelope.payload::<VerificationChallenge>() {
        Ok(challenge) => challenge,
        Err(PayloadError::Missing) => VerificationChallenge::default(),
        Err(e) => {
            warn!(error = %e, "Invalid verification payload");
            return Err(WebhookError::InvalidChallenge(e));
        }
    };

    let msg_sig = signer.sign_verification_challenge(&challenge.event_ts, &challenge.plain_token);

    info!("Verification challenge completed");
    Ok(VerificationResponse {
        plain_token: challenge.plain_token,
        msg_sig,
        responce_time: challenge.event_ts,
    })
}

/// Decode an event delivery (`op = 0`) and hand it to the handler.
///
/// A missing `d` dispatches an empty payload; a `d` of the wrong shape is an error.
pub async fn dispatch_event(
    handler: &dyn EventHandler,
    envelope: &Envelope,
) -> Result<(), DispatchError> {
    let event_type = envelope.event_type();
    let payload = match envelope.payload::<EventEnvelope>() {
        Ok(payload) => payload,
        Err(PayloadError::Missing) => EventEnvelope::default(),
        Err(PayloadError::Malformed(e)) => return Err(DispatchError::InvalidEvent(e)),
    };

    debug!(event_type = %event_type, "Dispatching event");
    handler.handle(&event_type, &payload).await?;

    info!(event_type = %event_type, "Event processed");
    Ok(())
}

/// The event path's response policy: log any failure and answer `200 null`.
///
/// The platform treats every non-200 as a reason to redeliver, and
/// redelivery is never wanted here.
pub fn acknowledge(outcome: Result<(), DispatchError>) -> Response {
    match outcome {
        Ok(()) => {}
        Err(DispatchError::InvalidEvent(e)) => {
            warn!(error = %e, "Failed to decode event payload; acknowledging anyway");
        }
        Err(DispatchError::Handler(e)) => {
            error!(error = %e, "Event handler failed; acknowledging anyway");
        }
    }

    (StatusCode::OK, Json(serde_json::Value::Null)).into_response()
}
