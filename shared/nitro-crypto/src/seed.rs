//! Seed Derivation
//!
//! The platform derives the bot's Ed25519 seed from the app secret by
//! repeating the secret's bytes until 32 bytes are filled. Both sides run the
//! same algorithm, so it must stay bit-for-bit identical: short secrets give
//! repeating seeds and that is accepted.

use zeroize::Zeroizing;

use crate::{CryptoError, Result};

/// Length of an Ed25519 seed in bytes.
pub const SEED_LEN: usize = ed25519_dalek::SECRET_KEY_LENGTH;

/// Derive the 32-byte signing seed from an app secret.
///
/// `seed[i] = secret[i % secret.len()]`.
pub fn derive_seed(secret: &str) -> Result<Zeroizing<[u8; SEED_LEN]>> {
    let bytes = secret.as_bytes();
    if bytes.is_empty() {
        return Err(CryptoError::InvalidSecret);
    }

    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    for (slot, byte) in seed.iter_mut().zip(bytes.iter().cycle()) {
        *slot = *byte;
    }

    Ok(seed)
}
