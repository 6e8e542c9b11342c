//! Cryptography Error Types

use thiserror::Error;

/// Errors produced while deriving keys or checking signatures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The app secret was empty, so no seed can be derived from it.
    #[error("app secret must not be empty")]
    InvalidSecret,

    /// Signature is not valid hex or does not decode to 64 bytes.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// Signature does not match the message under our public key.
    #[error("signature mismatch")]
    SignatureMismatch,
}

/// Result type for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
