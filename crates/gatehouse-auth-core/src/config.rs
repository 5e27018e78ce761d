//! Configuration types for the auth core

use std::time::Duration;

use crate::AuthError;

/// Auth core configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing (HS256)
    pub token_secret: String,
    /// How long issued tokens are valid
    pub token_lifetime: Duration,
}

impl AuthConfig {
    /// Minimum allowed signing secret length in bytes (256 bits)
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Create a new auth config.
    ///
    /// # Errors
    /// Fails if the secret is shorter than [`Self::MIN_SECRET_LENGTH`]
    /// bytes.
    pub fn new(token_secret: impl Into<String>) -> Result<Self, AuthError> {
        let token_secret = token_secret.into();
        if token_secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(AuthError::Validation(format!(
                "token secret must be at least {} bytes, got {}",
                Self::MIN_SECRET_LENGTH,
                token_secret.len()
            )));
        }

        Ok(Self {
            token_secret,
            token_lifetime: Duration::from_secs(60 * 60), // 1 hour
        })
    }

    /// Set the token lifetime
    pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_rejected() {
        assert!(AuthConfig::new("short").is_err());
        assert!(AuthConfig::new("a".repeat(31)).is_err());
    }

    #[test]
    fn test_minimum_length_secret_accepted() {
        let config = AuthConfig::new("a".repeat(32)).unwrap();
        assert_eq!(config.token_lifetime, Duration::from_secs(3600));
    }
}
