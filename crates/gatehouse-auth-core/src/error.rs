//! Auth errors

use gatehouse_store::StoreError;
use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Malformed input (empty username, oversized field, etc.)
    #[error("invalid input: {0}")]
    Validation(String),

    /// User not found
    #[error("user not found")]
    UserNotFound,

    /// Registration conflict: the username is already taken
    #[error("user already exists")]
    UserAlreadyExists,

    /// Invalid credentials (wrong password)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Invalid token (malformed, bad signature, unknown subject format)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Token signing failed; indicates a bad signing key, not a caller error
    #[error("token signing failed: {0}")]
    Signing(String),

    /// Password hashing failed; indicates broken crypto setup or a
    /// corrupt stored hash, not a caller error
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Store failure (transient infrastructure error)
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::UserNotFound => 404,
            Self::UserAlreadyExists => 409,
            Self::Signing(_) | Self::Hashing(_) => 500,
            Self::Store(_) => 503,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "INVALID_INPUT",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Signing(_) => "SIGNING_ERROR",
            Self::Hashing(_) => "HASHING_ERROR",
            Self::Store(_) => "STORE_UNAVAILABLE",
        }
    }
}
