//! Authentication adapters.
//!
//! Implementations of the `TokenVerifier` port:
//!
//! - `oidc` - Production verifier for any OIDC provider
//! - `mock` - Test implementation that doesn't require external services

mod mock;
mod oidc;

pub use mock::MockTokenVerifier;
pub use oidc::{OidcConfig, OidcTokenVerifier};
