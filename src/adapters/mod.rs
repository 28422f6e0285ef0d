//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Bearer token verification (OIDC, mock)
//! - `http` - axum REST surface
//! - `memory` - Process-local repositories
//! - `postgres` - sqlx-backed repositories

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
