//! Application state

use std::sync::Arc;

use gatehouse_auth_core::AuthService;
use gatehouse_store::RedisStore;

use crate::config::Config;

/// Type alias for the auth service with the concrete store backend
pub type AuthServiceImpl = AuthService<RedisStore, RedisStore>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service for the account and session lifecycle
    pub auth: Arc<AuthServiceImpl>,
    /// Store handle (shared reference for readiness checks)
    pub store: RedisStore,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: RedisStore, config: Config) -> Self {
        let auth = AuthService::new(
            &config.auth,
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        );

        Self {
            auth: Arc::new(auth),
            store,
            config: Arc::new(config),
        }
    }
}
