//! Authentication types for the domain layer.
//!
//! These types represent the verified identity carried by a request. They
//! have **no external dependencies** - any OIDC provider (Keycloak, Zitadel,
//! Auth0) can populate them via the `TokenVerifier` port.
//!
//! Claims are only ever produced by a verifier after signature, issuer,
//! audience and expiry checks. Nothing in the domain parses tokens.

use super::SubjectId;
use thiserror::Error;

/// Verified identity claims for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedClaims {
    /// Stable subject identifier from the identity provider.
    pub subject: SubjectId,

    /// Email address. Informational only; empty when the token has none.
    pub email: String,

    /// Display name. Informational only; empty when the token has none.
    pub display_name: String,
}

impl VerifiedClaims {
    /// Creates a new set of verified claims.
    pub fn new(
        subject: SubjectId,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            subject,
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}

/// Authentication errors that can occur during token verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The identity provider could not be reached or returned garbage.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
