//! HTTP request handlers

pub mod health;
pub mod tokens;
pub mod users;

pub use health::{health, ready};
pub use tokens::{invalidate, login, validate};
pub use users::{delete_user, list_users, register};
