//! Redis-backed store implementation

mod sessions;
mod users;

use std::future::Future;
use std::time::Duration;

use redis::aio::ConnectionManager;
use redis::RedisResult;

use crate::error::{StoreError, StoreResult};

/// Key prefix for session records.
///
/// Session and user records share one keyspace; the prefixes must stay
/// disjoint or the prefix scans would match records of the other kind.
pub(crate) const SESSION_PREFIX: &str = "session:";

/// Key prefix for user records
pub(crate) const USER_PREFIX: &str = "user:";

/// Keys requested per SCAN round trip, bounding per-call work against a
/// large keyspace
pub(crate) const SCAN_COUNT: usize = 10;

/// Redis connection configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Connection URL, e.g. `redis://127.0.0.1:6379`
    pub url: String,
    /// Deadline for a single store call; an elapsed deadline surfaces as
    /// [`StoreError::Timeout`]
    pub op_timeout: Duration,
    /// Optional item-level keep-alive for session keys. This is store
    /// configuration, not a protocol invariant: sessions otherwise live
    /// until explicitly deleted or overwritten.
    pub session_ttl: Option<Duration>,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            op_timeout: Duration::from_secs(5),
            session_ttl: None,
        }
    }
}

/// Redis-backed session and user store
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    config: RedisConfig,
}

impl RedisStore {
    /// Connect to Redis and return a store handle.
    ///
    /// The connection manager reconnects on failure; individual calls
    /// still fail fast while a reconnect is in flight.
    pub async fn connect(config: RedisConfig) -> StoreResult<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let conn = ConnectionManager::new(client).await?;
        tracing::debug!("redis connection manager initialized");
        Ok(Self { conn, config })
    }

    /// Check store connectivity (used by readiness probes)
    pub async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.connection();
        self.call(redis::cmd("PING").query_async::<()>(&mut conn))
            .await
    }

    pub(crate) fn connection(&self) -> ConnectionManager {
        self.conn.clone()
    }

    pub(crate) fn session_ttl(&self) -> Option<Duration> {
        self.config.session_ttl
    }

    /// Run a store call under the configured deadline
    pub(crate) async fn call<T>(
        &self,
        fut: impl Future<Output = RedisResult<T>>,
    ) -> StoreResult<T> {
        match tokio::time::timeout(self.config.op_timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::Timeout),
        }
    }

    /// Collect all keys matching a pattern via a SCAN cursor loop.
    ///
    /// Each round trip is bounded by [`SCAN_COUNT`]; the loop terminates
    /// when the cursor returns to zero. The listing restarts from scratch
    /// on every call.
    pub(crate) async fn scan_keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let mut conn = self.connection();
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();

        loop {
            let (next, batch): (u64, Vec<String>) = self
                .call(
                    redis::cmd("SCAN")
                        .arg(cursor)
                        .arg("MATCH")
                        .arg(pattern)
                        .arg("COUNT")
                        .arg(SCAN_COUNT)
                        .query_async(&mut conn),
                )
                .await?;

            keys.extend(batch);
            cursor = next;
            if cursor == 0 {
                break;
            }
        }

        Ok(keys)
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Storage key for a user's session record
pub(crate) fn session_key(username: &str) -> String {
    format!("{SESSION_PREFIX}{username}")
}

/// Storage key for a user record
pub(crate) fn user_key(username: &str) -> String {
    format!("{USER_PREFIX}{username}")
}
