//! Store errors

use thiserror::Error;

/// Store errors
///
/// Absent records are not errors; lookups return `Option`. Every variant
/// here means the store itself misbehaved.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying Redis failure (connection, protocol, server error)
    #[error("store unavailable: {0}")]
    Redis(#[from] redis::RedisError),

    /// A stored record failed to encode or decode
    #[error("record codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The operation exceeded its deadline
    #[error("store operation timed out")]
    Timeout,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
