//! Webhook Signature Authentication
//!
//! Ed25519 verification of inbound deliveries plus the replay window check.

pub mod error;
pub mod middleware;
pub mod replay;

pub use error::AuthError;
pub use middleware::{require_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};
pub use replay::ReplayGuard;
