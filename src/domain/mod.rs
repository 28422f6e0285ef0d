//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, claims)
//! - `user` - Local user records provisioned from verified claims
//! - `trip` - Trip entity, owned by a user
//! - `location` - Location entity, nested under a trip

pub mod foundation;
pub mod location;
pub mod trip;
pub mod user;
