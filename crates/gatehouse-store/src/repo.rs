//! Store traits
//!
//! Async persistence interfaces for session and user records. The auth
//! orchestrator depends only on these, never on a concrete backend.

use async_trait::async_trait;

use gatehouse_types::{Session, User};

use crate::error::StoreResult;

/// Session store trait
///
/// Sessions are keyed by username; there is at most one per user.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Upsert the session for its username. An existing session for the
    /// same user is overwritten, never merged.
    async fn create_session(&self, session: &Session) -> StoreResult<()>;

    /// Look up the session for a username
    async fn get_session(&self, username: &str) -> StoreResult<Option<Session>>;

    /// Delete the session for a username. Deleting an absent session is
    /// not an error.
    async fn delete_session(&self, username: &str) -> StoreResult<()>;

    /// Enumerate all sessions. Restartable from scratch only; not
    /// resumable mid-scan across calls.
    async fn list_sessions(&self) -> StoreResult<Vec<Session>>;
}

/// User store trait
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by username
    async fn get_user(&self, username: &str) -> StoreResult<Option<User>>;

    /// Atomically create the user if the username is free. Returns
    /// `false` when the username is already taken.
    async fn create_user(&self, user: &User) -> StoreResult<bool>;

    /// Unconditional upsert of a user record
    async fn create_or_set_user(&self, user: &User) -> StoreResult<()>;

    /// Enumerate all users
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Delete a user record. Deleting an absent user is not an error.
    async fn delete_user(&self, username: &str) -> StoreResult<()>;
}
