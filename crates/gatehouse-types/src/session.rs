//! Session types

use serde::{Deserialize, Serialize};

/// Server-side proof of an issued token.
///
/// Binds a username to the single currently valid token for that user.
/// At most one session exists per username; creating a session over an
/// existing one overwrites it. Presence of this record is the sole
/// authority for "is this token currently valid" - signature and expiry
/// checks alone are not enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Owning username, also the storage key
    pub username: String,
    /// The currently valid signed token, compared bytewise on validation
    pub token: String,
}

impl Session {
    /// Create a new session record
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Encode the record for key-value storage
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decode a record previously produced by [`Session::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
