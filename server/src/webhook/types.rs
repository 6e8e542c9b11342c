//! Webhook Types
//!
//! The outer envelope of every delivery and the payloads carried in its `d`
//! field. `d` is kept as raw JSON until `op` says which payload it is, then
//! decoded exactly once into that type.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::events::EventType;

/// Envelope opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "u32")]
pub enum Opcode {
    /// `0`: an event delivery.
    #[default]
    Dispatch,
    /// `13`: the callback-verify handshake.
    CallbackVerify,
    /// Any other opcode; acknowledged and ignored.
    Other(u32),
}

impl Opcode {
    pub const DISPATCH: u32 = 0;
    pub const CALLBACK_VERIFY: u32 = 13;
}

impl From<u32> for Opcode {
    fn from(op: u32) -> Self {
        match op {
            Self::DISPATCH => Self::Dispatch,
            Self::CALLBACK_VERIFY => Self::CallbackVerify,
            other => Self::Other(other),
        }
    }
}

impl From<Opcode> for u32 {
    fn from(op: Opcode) -> Self {
        match op {
            Opcode::Dispatch => Opcode::DISPATCH,
            Opcode::CallbackVerify => Opcode::CALLBACK_VERIFY,
            Opcode::Other(other) => other,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u32::from(*self))
    }
}

/// Delivery id. Documented as an integer; string ids are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DeliveryId {
    Number(u64),
    Text(String),
}

impl Default for DeliveryId {
    fn default() -> Self {
        Self::Number(0)
    }
}

impl fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Outer wrapper of every webhook delivery.
///
/// Absent fields take their zero value, so a body without `op` is an event.
#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub id: DeliveryId,
    #[serde(default)]
    pub op: Opcode,
    #[serde(default)]
    pub d: Option<Box<RawValue>>,
    #[serde(default)]
    pub s: u64,
    #[serde(default)]
    pub t: String,
}

/// Why the `d` field could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is missing")]
    Missing,
    #[error("payload does not match the expected shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Envelope {
    /// Event type tag from `t`.
    pub fn event_type(&self) -> EventType {
        EventType::parse_str(&self.t)
    }

    /// Decode `d` as `T`. Missing or `null` `d` is [`PayloadError::Missing`].
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, PayloadError> {
        let raw = self.d.as_ref().ok_or(PayloadError::Missing)?;
        Ok(serde_json::from_str(raw.get())?)
    }
}

/// `d` of an `op = 13` delivery. Absent fields are signed as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerificationChallenge {
    #[serde(default)]
    pub plain_token: String,
    #[serde(default)]
    pub event_ts: String,
}

/// Reply to the callback-verify handshake.
///
/// `responce_time` is spelled the way the platform's contract spells it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResponse {
    pub plain_token: String,
    pub msg_sig: String,
    pub responce_time: String,
}

/// Message author. Which id is present depends on where the event came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    /// Legacy user id (guild channels).
    #[serde(default)]
    pub id: Option<String>,
    /// User open id (C2C and friend events).
    #[serde(default)]
    pub user_openid: Option<String>,
    /// Member open id (group events).
    #[serde(default)]
    pub member_openid: Option<String>,
}

impl Author {
    /// The most specific id available: user open id, then member open id, then legacy id.
    pub fn open_id(&self) -> Option<&str> {
        self.user_openid
            .as_deref()
            .or(self.member_openid.as_deref())
            .or(self.id.as_deref())
    }
}

/// `d` of an `op = 0` delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventEnvelope {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group_openid: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub content: Option<String>,
    /// Message id.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl EventEnvelope {
    /// Group identifier, preferring the open id form.
    pub fn group(&self) -> Option<&str> {
        self.group_openid.as_deref().or(self.group_id.as_deref())
    }

    /// Author id, if the event carries an author.
    pub fn author_id(&self) -> Option<&str> {
        self.author.as_ref().and_then(Author::open_id)
    }
}
