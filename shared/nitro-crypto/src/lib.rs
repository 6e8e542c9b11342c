//! Nitro Bot Webhook Cryptography
//!
//! Ed25519 signing as required by the QQ bot webhook protocol.
//!
//! - **Seed derivation**: the app secret is repeated until it fills a 32-byte seed
//! - **Signer**: verifies inbound deliveries and answers the callback-verify handshake

pub mod error;
pub mod seed;
pub mod signer;

pub use error::{CryptoError, Result};
pub use seed::{derive_seed, SEED_LEN};
pub use signer::{Signer, SIGNATURE_LEN};
