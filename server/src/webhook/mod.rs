//! QQ Bot Webhook
//!
//! Envelope parsing, opcode routing, and event dispatch for authenticated
//! deliveries.

pub mod error;
pub mod events;
pub mod handlers;
pub mod registry;
pub mod types;

pub use error::{DispatchError, WebhookError};
pub use events::EventType;
pub use registry::{handler_fn, EventError, EventHandler, EventRegistry};
