//! Messages posted by the host shell that embeds the purchase screen.
//!
//! The host pushes an opaque JSON payload carrying the current user's
//! identity. Nothing is validated: the payload is kept verbatim and only
//! the `userId` field is read when a purchase is submitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field of the payload that identifies the paying user.
pub const USER_ID_FIELD: &str = "userId";

/// An inbound message from the host shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostMessage {
    pub payload: HostPayload,
}

impl HostMessage {
    pub fn new(payload: impl Into<HostPayload>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

/// Identity payload delivered by the host, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostPayload(pub Value);

impl HostPayload {
    /// The `userId` field, if the payload is an object that carries one.
    ///
    /// The value is returned untouched, an explicit `null` included, so it
    /// reaches the purchase endpoint with the same JSON type the host sent.
    pub fn user_id(&self) -> Option<&Value> {
        self.0.get(USER_ID_FIELD)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for HostPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
