//! In-memory stores for testing

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use gatehouse_store::{SessionStore, StoreError, StoreResult, UserStore};
use gatehouse_types::{Session, User};

/// In-memory user store for testing
#[derive(Default, Clone)]
pub struct MemoryUserStore {
    users: Arc<DashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_user(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.users.get(username).map(|r| r.value().clone()))
    }

    async fn create_user(&self, user: &User) -> StoreResult<bool> {
        match self.users.entry(user.username.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => Ok(false),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(user.clone());
                Ok(true)
            }
        }
    }

    async fn create_or_set_user(&self, user: &User) -> StoreResult<()> {
        self.users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.iter().map(|r| r.value().clone()).collect())
    }

    async fn delete_user(&self, username: &str) -> StoreResult<()> {
        self.users.remove(username);
        Ok(())
    }
}

/// In-memory session store for testing, with write-failure injection for
/// exercising the "session write fails after minting" path
#[derive(Default, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<DashMap<String, Session>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail with a store timeout
    #[allow(dead_code)]
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create_session(&self, session: &Session) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Timeout);
        }
        self.sessions
            .insert(session.username.clone(), session.clone());
        Ok(())
    }

    async fn get_session(&self, username: &str) -> StoreResult<Option<Session>> {
        Ok(self.sessions.get(username).map(|r| r.value().clone()))
    }

    async fn delete_session(&self, username: &str) -> StoreResult<()> {
        self.sessions.remove(username);
        Ok(())
    }

    async fn list_sessions(&self) -> StoreResult<Vec<Session>> {
        Ok(self.sessions.iter().map(|r| r.value().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_user_store_set_if_absent() {
        let store = MemoryUserStore::new();
        let user = User::new("alice", "hash");

        assert!(store.create_user(&user).await.unwrap());
        assert!(!store.create_user(&user).await.unwrap());

        let found = store.get_user("alice").await.unwrap();
        assert_eq!(found.unwrap().hashed_password, "hash");
    }

    #[tokio::test]
    async fn test_memory_session_store_overwrites() {
        let store = MemorySessionStore::new();

        store
            .create_session(&Session::new("alice", "t1"))
            .await
            .unwrap();
        store
            .create_session(&Session::new("alice", "t2"))
            .await
            .unwrap();

        let session = store.get_session("alice").await.unwrap().unwrap();
        assert_eq!(session.token, "t2");
        assert_eq!(store.len(), 1);
    }
}
