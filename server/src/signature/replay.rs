//! Replay Guard
//!
//! Rejects deliveries whose claimed timestamp is too far from the local clock,
//! in either direction.

use chrono::{DateTime, TimeDelta, Utc};

use super::error::AuthError;
use crate::config::DEFAULT_SIGNATURE_TOLERANCE_SECS;

/// Validates `X-Signature-Timestamp` against wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayGuard {
    tolerance: TimeDelta,
}

impl Default for ReplayGuard {
    fn default() -> Self {
        Self::from_secs(DEFAULT_SIGNATURE_TOLERANCE_SECS)
    }
}

impl ReplayGuard {
    /// Create a guard that accepts up to `secs` of skew.
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        let tolerance = i64::try_from(secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        Self { tolerance }
    }

    /// The configured tolerance window.
    pub const fn tolerance(&self) -> TimeDelta {
        self.tolerance
    }

    /// Validate a raw timestamp header against the current time.
    pub fn validate(&self, raw: &str) -> Result<(), AuthError> {
        self.validate_at(raw, Utc::now())
    }

    /// Validate a raw timestamp header against `now`.
    ///
    /// A skew of exactly the tolerance is accepted.
    pub fn validate_at(&self, raw: &str, now: DateTime<Utc>) -> Result<(), AuthError> {
        let secs: i64 = raw
            .parse()
            .map_err(|_| AuthError::MalformedTimestamp(raw.to_string()))?;
        let claimed = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| AuthError::MalformedTimestamp(raw.to_string()))?;

        if (now - claimed).abs() > self.tolerance {
            return Err(AuthError::TimestampExpired);
        }

        Ok(())
    }
}
