//! Auth service - composes hashing, token issuing, and the stores into
//! the account and session lifecycle.
//!
//! Per-user state machine: `NoAccount -> Registered -> (LoggedOut <->
//! LoggedIn) -> Deleted`. The service itself is stateless; all shared
//! mutable state lives behind the store traits, and concurrent calls
//! need no in-process locking.

use std::collections::BTreeMap;
use std::sync::Arc;

use subtle::ConstantTimeEq;

use gatehouse_store::{SessionStore, UserStore};
use gatehouse_types::{Session, User};

use crate::{config::AuthConfig, password, token::TokenIssuer, AuthError};

/// Maximum accepted username length
const MAX_USERNAME_LEN: usize = 64;

/// Authentication service
///
/// Owns every cross-component invariant:
/// - at most one authoritative token per user
/// - no token validates without a live session holding that exact token
/// - a session is written only after its token was successfully minted
pub struct AuthService<U: UserStore, S: SessionStore> {
    issuer: TokenIssuer,
    users: Arc<U>,
    sessions: Arc<S>,
}

impl<U: UserStore, S: SessionStore> AuthService<U, S> {
    /// Create a new auth service
    pub fn new(config: &AuthConfig, users: Arc<U>, sessions: Arc<S>) -> Self {
        Self {
            issuer: TokenIssuer::new(config.token_secret.as_bytes(), config.token_lifetime),
            users,
            sessions,
        }
    }

    /// Register a new account (`NoAccount -> Registered`).
    ///
    /// The username check and the write are a single atomic step in the
    /// store, so two concurrent registrations cannot both win.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        validate_username(username)?;
        if password.is_empty() {
            return Err(AuthError::Validation("password must not be empty".into()));
        }

        let hashed_password = password::hash_password(password)?;
        let user = User::new(username, hashed_password);

        if !self.users.create_user(&user).await? {
            return Err(AuthError::UserAlreadyExists);
        }

        tracing::info!(user = %username, "registered account");
        Ok(user)
    }

    /// Issue a token (`Registered|LoggedOut -> LoggedIn`).
    ///
    /// Overwrites any existing session for the user: the previous token
    /// stops validating, which is the single-session policy, not a bug.
    /// If the session write fails the minted token is never returned.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .users
            .get_user(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !password::verify_password(password, &user.hashed_password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.mint(&user.username, BTreeMap::new())?;
        self.sessions
            .create_session(&Session::new(&user.username, &token))
            .await?;

        tracing::info!(user = %username, "issued session token");
        Ok(token)
    }

    /// Check whether a presented token is currently valid.
    ///
    /// Double-check: cryptographic validity first, then bytewise equality
    /// against the stored session. A superseded or revoked token fails
    /// the second check even while its signature still verifies.
    ///
    /// Crypto failures and an absent session are "not valid" (`Ok(false)`);
    /// an unreachable store is an error so callers can tell the two apart.
    pub async fn validate(&self, token: &str) -> Result<bool, AuthError> {
        let claims = match self.issuer.decode(token) {
            Ok(claims) => claims,
            Err(AuthError::InvalidToken | AuthError::TokenExpired) => return Ok(false),
            Err(e) => return Err(e),
        };

        let session = match self.sessions.get_session(&claims.sub).await? {
            Some(session) => session,
            None => {
                tracing::debug!(user = %claims.sub, "no live session for presented token");
                return Ok(false);
            }
        };

        Ok(session.token.as_bytes().ct_eq(token.as_bytes()).into())
    }

    /// Revoke the user's session (`LoggedIn -> LoggedOut`).
    ///
    /// Idempotent: invalidating an already-logged-out or unknown user is
    /// not an error.
    pub async fn invalidate(&self, username: &str) -> Result<(), AuthError> {
        self.sessions.delete_session(username).await?;
        tracing::info!(user = %username, "invalidated session");
        Ok(())
    }

    /// Delete an account and its session (`any -> Deleted`).
    ///
    /// The session goes first; if that delete fails the whole operation
    /// aborts, so a session can never outlive its user record.
    pub async fn delete_account(&self, username: &str) -> Result<(), AuthError> {
        let user = self
            .users
            .get_user(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.sessions.delete_session(&user.username).await?;
        self.users.delete_user(&user.username).await?;

        tracing::info!(user = %username, "deleted account");
        Ok(())
    }

    /// Enumerate all accounts. Returns an empty vec when none exist.
    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        Ok(self.users.list_users().await?)
    }
}

impl<U: UserStore, S: SessionStore> std::fmt::Debug for AuthService<U, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

/// Validate a username: non-empty, bounded length, key-safe characters
fn validate_username(username: &str) -> Result<(), AuthError> {
    if username.is_empty() {
        return Err(AuthError::Validation("username must not be empty".into()));
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(AuthError::Validation(format!(
            "username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        return Err(AuthError::Validation(
            "username may only contain letters, digits, '_', '-' and '.'".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username_accepts_common_names() {
        for name in ["alice", "bob", "user_1", "first.last", "a-b"] {
            assert!(validate_username(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_validate_username_rejects_empty() {
        assert!(matches!(
            validate_username(""),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_username_rejects_key_breaking_characters() {
        // Characters that would leak into the store's key syntax
        for name in ["a b", "user:1", "glob*", "semi;colon", "new\nline"] {
            assert!(validate_username(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_username_rejects_oversized() {
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LEN)).is_ok());
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LEN + 1)).is_err());
    }
}
