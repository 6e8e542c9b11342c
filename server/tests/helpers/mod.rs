//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for sending requests through the full axum router, a
//! recording event handler, and a signer that plays the platform's side of
//! the protocol.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use chrono::Utc;
use ed25519_dalek::{Signer as _, SigningKey};
use http_body_util::BodyExt;
use nitro_crypto::{derive_seed, Signer};
use nitro_server::api::{create_router, AppState};
use nitro_server::config::Config;
use nitro_server::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use nitro_server::webhook::types::EventEnvelope;
use nitro_server::webhook::{EventError, EventHandler, EventType};
use tower::ServiceExt;

// ============================================================================
// Recording event handler
// ============================================================================

/// Records every dispatched event; optionally fails each call.
#[derive(Default)]
pub struct RecordingHandler {
    calls: Mutex<Vec<(EventType, EventEnvelope)>>,
    fail: bool,
}

impl RecordingHandler {
    /// A handler that returns an error after recording.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<(EventType, EventEnvelope)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventHandler for RecordingHandler {
    async fn handle(
        &self,
        event_type: &EventType,
        payload: &EventEnvelope,
    ) -> Result<(), EventError> {
        self.calls
            .lock()
            .unwrap()
            .push((event_type.clone(), payload.clone()));
        if self.fail {
            return Err(EventError::Failed("recording handler told to fail".into()));
        }
        Ok(())
    }
}

// ============================================================================
// Test App
// ============================================================================

/// A test application wrapping the full axum router.
pub struct TestApp {
    pub router: Router,
    pub config: Config,
    pub events: Arc<RecordingHandler>,
}

impl TestApp {
    /// Create a new test app with the default test config.
    pub fn new() -> Self {
        Self::with_handler(RecordingHandler::default())
    }

    /// Create a test app whose event handler is `handler`.
    pub fn with_handler(handler: RecordingHandler) -> Self {
        Self::with_config_and_handler(Config::default_for_test(), handler)
    }

    /// Create a test app with a custom config.
    pub fn with_config_and_handler(config: Config, handler: RecordingHandler) -> Self {
        let signer = Signer::from_secret(&config.app_secret).expect("Failed to create signer");
        let events = Arc::new(handler);
        let state = AppState::new(config.clone(), signer, events.clone());

        Self {
            router: create_router(state),
            config,
            events,
        }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> axum::http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Build a `POST /webhook` signed by the platform for `timestamp`.
    pub fn signed_webhook(&self, timestamp: i64, body: &str) -> Request<Body> {
        let timestamp = timestamp.to_string();
        let signature = platform_signature(&self.config.app_secret, &timestamp, body.as_bytes());
        Self::request(Method::POST, "/webhook")
            .header("content-type", "application/json")
            .header(TIMESTAMP_HEADER, timestamp)
            .header(SIGNATURE_HEADER, signature)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }
}

// ============================================================================
// Platform side
// ============================================================================

/// Current Unix time in seconds.
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Sign `timestamp || body` with the key the platform derives from `secret`.
pub fn platform_signature(secret: &str, timestamp: &str, body: &[u8]) -> String {
    let seed = derive_seed(secret).expect("Failed to derive seed");
    let key = SigningKey::from_bytes(&seed);
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body);
    hex::encode(key.sign(&message).to_bytes())
}

/// Collect a response into status and body bytes.
pub async fn read(response: Response<Body>) -> (StatusCode, Vec<u8>) {
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes()
        .to_vec();
    (status, body)
}

/// Collect a response body as JSON.
pub async fn read_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = read(response).await;
    let json = serde_json::from_slice(&body).expect("Response body is not JSON");
    (status, json)
}
