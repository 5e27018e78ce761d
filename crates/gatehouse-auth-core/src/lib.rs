//! Gatehouse Auth Core - session/token lifecycle
//!
//! Core authentication functionality: credential hashing, token
//! issue/validation, and the account/session lifecycle orchestrator.
//! Storage is reached only through the `gatehouse-store` traits.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::AuthService;
pub use token::{TokenClaims, TokenIssuer};
