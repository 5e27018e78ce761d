//! Redis session store implementation

use async_trait::async_trait;
use redis::AsyncCommands;

use gatehouse_types::Session;

use crate::error::StoreResult;
use crate::repo::SessionStore;

use super::{session_key, RedisStore, SESSION_PREFIX};

#[async_trait]
impl SessionStore for RedisStore {
    async fn create_session(&self, session: &Session) -> StoreResult<()> {
        let bytes = session.to_bytes()?;
        let key = session_key(&session.username);
        let mut conn = self.connection();

        match self.session_ttl() {
            Some(ttl) => {
                self.call(conn.set_ex::<_, _, ()>(key, bytes, ttl.as_secs()))
                    .await
            }
            None => self.call(conn.set::<_, _, ()>(key, bytes)).await,
        }
    }

    async fn get_session(&self, username: &str) -> StoreResult<Option<Session>> {
        let mut conn = self.connection();
        let bytes: Option<Vec<u8>> = self.call(conn.get(session_key(username))).await?;

        bytes
            .map(|b| Session::from_bytes(&b))
            .transpose()
            .map_err(Into::into)
    }

    async fn delete_session(&self, username: &str) -> StoreResult<()> {
        let mut conn = self.connection();
        self.call(conn.del::<_, ()>(session_key(username))).await
    }

    async fn list_sessions(&self) -> StoreResult<Vec<Session>> {
        let keys = self.scan_keys(&format!("{SESSION_PREFIX}*")).await?;

        let mut sessions = Vec::with_capacity(keys.len());
        for key in keys {
            let username = key.strip_prefix(SESSION_PREFIX).unwrap_or(&key);
            // A session can disappear between the scan and the fetch;
            // skip it rather than fail the whole listing.
            match self.get_session(username).await? {
                Some(session) => sessions.push(session),
                None => tracing::debug!(%key, "session vanished during listing"),
            }
        }

        Ok(sessions)
    }
}
