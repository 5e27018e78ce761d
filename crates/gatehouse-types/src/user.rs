//! User account types

use serde::{Deserialize, Serialize};

/// A registered user account.
///
/// The username is the unique identifier and the storage key; it is
/// immutable once the account exists. Updates are whole-record upserts,
/// never partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account name
    pub username: String,
    /// Opaque password hash (PHC string)
    pub hashed_password: String,
    /// Advisory flag kept for record compatibility; no lifecycle
    /// transition reads or updates it
    #[serde(default)]
    pub logged_in: bool,
}

impl User {
    /// Create a new user record with a pre-hashed password
    pub fn new(username: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hashed_password: hashed_password.into(),
            logged_in: false,
        }
    }

    /// Encode the record for key-value storage
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decode a record previously produced by [`User::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
