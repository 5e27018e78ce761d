//! Gatehouse Types - Shared domain types
//!
//! This crate contains the domain types shared across Gatehouse crates:
//! - User account records
//! - Server-side session records

pub mod session;
pub mod user;

pub use session::*;
pub use user::*;
