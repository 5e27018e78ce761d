//! Gatehouse Store - key-value persistence boundary
//!
//! Store traits for session and user records, plus the Redis-backed
//! implementation. The auth core depends only on the traits; any
//! key-value backend that round-trips the byte encodings of
//! `gatehouse-types` can be substituted.

pub mod error;
pub mod redis;
pub mod repo;

pub use error::{StoreError, StoreResult};
pub use repo::{SessionStore, UserStore};
pub use self::redis::{RedisConfig, RedisStore};
