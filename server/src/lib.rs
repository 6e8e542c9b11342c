//! Nitro Bot Server
//!
//! Webhook endpoint for QQ bot push events: answers the Ed25519
//! callback-verify handshake and dispatches signed event deliveries.

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod signature;
pub mod webhook;
