//! Event Handler Registry
//!
//! Maps event type tags to business handlers. Unregistered tags fall through
//! to a logged no-op, so new platform event types never need router changes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use super::events::EventType;
use super::types::EventEnvelope;

/// Error returned by a business handler. Logged by the router, never surfaced.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("event handler failed: {0}")]
    Failed(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Business logic for decoded events.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event_type: &EventType, payload: &EventEnvelope)
        -> Result<(), EventError>;
}

/// Adapter that turns a plain function into an [`EventHandler`].
///
/// Build one with [`handler_fn`].
#[derive(Clone, Copy)]
pub struct HandlerFn<F>(F);

/// Wrap a synchronous function as an [`EventHandler`].
pub const fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&EventType, &EventEnvelope) -> Result<(), EventError> + Send + Sync,
{
    HandlerFn(f)
}

#[async_trait]
impl<F> EventHandler for HandlerFn<F>
where
    F: Fn(&EventType, &EventEnvelope) -> Result<(), EventError> + Send + Sync,
{
    async fn handle(
        &self,
        event_type: &EventType,
        payload: &EventEnvelope,
    ) -> Result<(), EventError> {
        (self.0)(event_type, payload)
    }
}

/// Event type to handler mapping with a default no-op.
#[derive(Clone, Default)]
pub struct EventRegistry {
    handlers: HashMap<EventType, Arc<dyn EventHandler>>,
}

impl EventRegistry {
    /// Create an empty registry. Every event is a no-op until registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the handler for an event type.
    pub fn register<H>(&mut self, event_type: EventType, handler: H) -> &mut Self
    where
        H: EventHandler + 'static,
    {
        self.handlers.insert(event_type, Arc::new(handler));
        self
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with<H>(mut self, event_type: EventType, handler: H) -> Self
    where
        H: EventHandler + 'static,
    {
        self.register(event_type, handler);
        self
    }

    pub fn is_registered(&self, event_type: &EventType) -> bool {
        self.handlers.contains_key(event_type)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[async_trait]
impl EventHandler for EventRegistry {
    async fn handle(
        &self,
        event_type: &EventType,
        payload: &EventEnvelope,
    ) -> Result<(), EventError> {
        match self.handlers.get(event_type) {
            Some(handler) => handler.handle(event_type, payload).await,
            None => {
                info!(event_type = %event_type, "Unhandled event type");
                Ok(())
            }
        }
    }
}
