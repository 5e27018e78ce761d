//! Configuration for the Auth API service.

use std::time::Duration;

use gatehouse_auth_core::AuthConfig;
use gatehouse_store::RedisConfig;

/// Auth API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Store configuration
    pub store: RedisConfig,

    /// Auth core configuration
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Store
        let redis_url =
            std::env::var("REDIS_URL").map_err(|_| ConfigError::Missing("REDIS_URL"))?;

        let store_timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("STORE_TIMEOUT_SECS"))?;

        // Optional item-level keep-alive for session keys
        let session_ttl = match std::env::var("SESSION_TTL_SECS") {
            Ok(raw) => Some(Duration::from_secs(
                raw.parse()
                    .map_err(|_| ConfigError::Invalid("SESSION_TTL_SECS"))?,
            )),
            Err(_) => None,
        };

        // Server port
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Token secret (minimum length enforced by AuthConfig)
        let token_secret =
            std::env::var("TOKEN_SECRET").map_err(|_| ConfigError::Missing("TOKEN_SECRET"))?;

        // Token lifetime (default 1 hour)
        let token_lifetime_secs: u64 = std::env::var("TOKEN_LIFETIME_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("TOKEN_LIFETIME_SECS"))?;

        let auth = AuthConfig::new(token_secret)
            .map_err(|e| ConfigError::AuthConfig(e.to_string()))?
            .with_token_lifetime(Duration::from_secs(token_lifetime_secs));

        Ok(Self {
            http_port,
            store: RedisConfig {
                url: redis_url,
                op_timeout: Duration::from_secs(store_timeout_secs),
                session_ttl,
            },
            auth,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Auth config error: {0}")]
    AuthConfig(String),
}
