//! Redis user store implementation

use async_trait::async_trait;
use redis::AsyncCommands;

use gatehouse_types::User;

use crate::error::StoreResult;
use crate::repo::UserStore;

use super::{user_key, RedisStore, USER_PREFIX};

#[async_trait]
impl UserStore for RedisStore {
    async fn get_user(&self, username: &str) -> StoreResult<Option<User>> {
        let mut conn = self.connection();
        let bytes: Option<Vec<u8>> = self.call(conn.get(user_key(username))).await?;

        bytes
            .map(|b| User::from_bytes(&b))
            .transpose()
            .map_err(Into::into)
    }

    async fn create_user(&self, user: &User) -> StoreResult<bool> {
        let bytes = user.to_bytes()?;
        let mut conn = self.connection();
        // SET NX makes the existence check and the write one atomic step
        self.call(conn.set_nx::<_, _, bool>(user_key(&user.username), bytes))
            .await
    }

    async fn create_or_set_user(&self, user: &User) -> StoreResult<()> {
        let bytes = user.to_bytes()?;
        let mut conn = self.connection();
        self.call(conn.set::<_, _, ()>(user_key(&user.username), bytes))
            .await
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let keys = self.scan_keys(&format!("{USER_PREFIX}*")).await?;

        let mut users = Vec::with_capacity(keys.len());
        for key in keys {
            let username = key.strip_prefix(USER_PREFIX).unwrap_or(&key);
            if let Some(user) = self.get_user(username).await? {
                users.push(user);
            }
        }

        Ok(users)
    }

    async fn delete_user(&self, username: &str) -> StoreResult<()> {
        let mut conn = self.connection();
        self.call(conn.del::<_, ()>(user_key(username))).await
    }
}
