//! Token verification port.
//!
//! Turns a raw bearer token into verified claims. Provider-agnostic: the
//! OIDC adapter works against Keycloak, Zitadel or Auth0, and a mock exists
//! for tests.
//!
//! # Contract
//!
//! Implementations must validate signature, issuer, audience and expiry
//! before returning claims:
//! - `AuthError::InvalidToken` for malformed or badly signed tokens
//! - `AuthError::TokenExpired` for expired tokens
//! - `AuthError::ServiceUnavailable` when the provider cannot be reached

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, VerifiedClaims};

/// Verifies bearer tokens.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` (without the "Bearer " prefix).
    async fn verify(&self, token: &str) -> Result<VerifiedClaims, AuthError>;
}
