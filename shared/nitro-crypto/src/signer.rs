//! Ed25519 Webhook Signer
//!
//! Holds the keypair derived from the app secret. Two distinct messages are
//! signed by the protocol and they are never interchangeable:
//!
//! - inbound deliveries: `timestamp || body`, verified against our public key
//! - callback-verify handshake: `event_ts || plain_token`, signed with our private key

use std::fmt;

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};

use crate::seed::{derive_seed, SEED_LEN};
use crate::{CryptoError, Result};

/// Length of an Ed25519 signature in bytes.
pub const SIGNATURE_LEN: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Keypair owner for the webhook protocol. Immutable after construction.
#[derive(Clone)]
pub struct Signer {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl Signer {
    /// Build a signer from the app secret using the platform's seed derivation.
    pub fn from_secret(secret: &str) -> Result<Self> {
        let seed = derive_seed(secret)?;
        Ok(Self::from_seed(&seed))
    }

    /// Build a signer directly from a 32-byte seed.
    #[must_use]
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Hex-encoded public key, safe to log.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.verifying_key.as_bytes())
    }

    /// Verify the signature of an inbound delivery.
    ///
    /// The signed message is the timestamp header followed by the raw body,
    /// with no separator.
    pub fn verify_signature(&self, timestamp: &str, body: &[u8], signature_hex: &str) -> Result<()> {
        let raw = hex::decode(signature_hex)
            .map_err(|e| CryptoError::MalformedSignature(e.to_string()))?;
        let bytes: [u8; SIGNATURE_LEN] = raw.as_slice().try_into().map_err(|_| {
            CryptoError::MalformedSignature(format!(
                "expected {SIGNATURE_LEN} bytes, got {}",
                raw.len()
            ))
        })?;
        let signature = Signature::from_bytes(&bytes);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.verifying_key
            .verify(&message, &signature)
            .map_err(|_| CryptoError::SignatureMismatch)
    }

    /// Sign a callback-verify challenge and return the lowercase hex signature.
    ///
    /// The signed message is `event_ts` followed by `plain_token`.
    pub fn sign_verification_challenge(&self, event_ts: &str, plain_token: &str) -> String {
        let mut message = Vec::with_capacity(event_ts.len() + plain_token.len());
        message.extend_from_slice(event_ts.as_bytes());
        message.extend_from_slice(plain_token.as_bytes());

        hex::encode(self.signing_key.sign(&message).to_bytes())
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}
