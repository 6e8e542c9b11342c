//! Server Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::fmt;

use thiserror::Error;

/// Default listen port when `SERVER_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Default replay window in seconds (5 minutes).
pub const DEFAULT_SIGNATURE_TOLERANCE_SECS: u64 = 300;

/// Default maximum webhook body buffered by the signature gate (1 MiB).
pub const DEFAULT_MAX_WEBHOOK_BODY_SIZE: usize = 1024 * 1024;

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} is required")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("{name} is invalid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Bot application identifier (`NITRO_BOT_APP_ID`)
    pub app_id: String,

    /// Bot token (`NITRO_BOT_TOKEN`). Not used by the webhook protocol.
    pub token: String,

    /// App secret (`NITRO_BOT_APP_SECRET`), source of the signing keypair
    pub app_secret: String,

    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Maximum allowed skew between `X-Signature-Timestamp` and now, in seconds
    pub signature_tolerance_secs: u64,

    /// Maximum webhook body size in bytes
    pub max_webhook_body_size: usize,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = match lookup("SERVER_PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_bind_address(&raw)?,
            None => format!("0.0.0.0:{DEFAULT_PORT}"),
        };

        let config = Self {
            app_id: lookup("NITRO_BOT_APP_ID").unwrap_or_default(),
            token: lookup("NITRO_BOT_TOKEN").unwrap_or_default(),
            app_secret: lookup("NITRO_BOT_APP_SECRET").unwrap_or_default(),
            bind_address,
            signature_tolerance_secs: parse_or(
                &lookup,
                "SIGNATURE_TOLERANCE_SECS",
                DEFAULT_SIGNATURE_TOLERANCE_SECS,
            )?,
            max_webhook_body_size: parse_or(
                &lookup,
                "MAX_WEBHOOK_BODY_SIZE",
                DEFAULT_MAX_WEBHOOK_BODY_SIZE,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that all required values are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.is_empty() {
            return Err(ConfigError::Missing("NITRO_BOT_APP_ID"));
        }
        if self.token.is_empty() {
            return Err(ConfigError::Missing("NITRO_BOT_TOKEN"));
        }
        if self.app_secret.is_empty() {
            return Err(ConfigError::Missing("NITRO_BOT_APP_SECRET"));
        }
        Ok(())
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            app_id: "102000000".into(),
            token: "test-token".into(),
            app_secret: "test-secret".into(),
            bind_address: "127.0.0.1:8080".into(),
            signature_tolerance_secs: DEFAULT_SIGNATURE_TOLERANCE_SECS,
            max_webhook_body_size: DEFAULT_MAX_WEBHOOK_BODY_SIZE,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("app_id", &self.app_id)
            .field("token", &"<redacted>")
            .field("app_secret", &"<redacted>")
            .field("bind_address", &self.bind_address)
            .field("signature_tolerance_secs", &self.signature_tolerance_secs)
            .field("max_webhook_body_size", &self.max_webhook_body_size)
            .finish()
    }
}

/// Accepts `8080`, `:8080` (all interfaces) or a full `host:port` listen address.
fn parse_bind_address(raw: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::Invalid {
        name: "SERVER_PORT",
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    let (host, port) = match trimmed.rsplit_once(':') {
        Some(("", port)) => ("0.0.0.0", port),
        Some((host, port)) => (host, port),
        None => ("0.0.0.0", trimmed),
    };
    let port: u16 = port.parse().map_err(|_| invalid())?;

    Ok(format!("{host}:{port}"))
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
        None => Ok(default),
    }
}
