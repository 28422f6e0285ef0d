//! Mock token verifier for testing.
//!
//! Maps fixed bearer tokens to claims so tests can authenticate as any
//! number of distinct identities without an identity provider.
//!
//! # Example
//!
//! ```ignore
//! use camplog::adapters::auth::MockTokenVerifier;
//!
//! let verifier = MockTokenVerifier::new()
//!     .with_subject("alice-token", "kc-alice")
//!     .with_subject("bob-token", "kc-bob");
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, SubjectId, ValidationError, VerifiedClaims};
use crate::ports::TokenVerifier;

/// Mock token verifier.
///
/// Tokens not registered return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockTokenVerifier {
    tokens: RwLock<HashMap<String, VerifiedClaims>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token that verifies to `claims`.
    pub fn with_claims(self, token: impl Into<String>, claims: VerifiedClaims) -> Self {
        self.add_token(token, claims);
        self
    }

    /// Registers a token for `subject`, with a derived email and display name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `subject` is empty
    pub fn try_with_subject(
        self,
        token: impl Into<String>,
        subject: &str,
    ) -> Result<Self, ValidationError> {
        let claims = VerifiedClaims::new(
            SubjectId::new(subject)?,
            format!("{}@test.example.com", subject),
            format!("Test User {}", subject),
        );
        Ok(self.with_claims(token, claims))
    }

    /// Like `try_with_subject`, ignoring registration of an empty subject.
    pub fn with_subject(self, token: impl Into<String>, subject: &str) -> Self {
        let token = token.into();
        match SubjectId::new(subject) {
            Ok(id) => self.with_claims(
                token,
                VerifiedClaims::new(
                    id,
                    format!("{}@test.example.com", subject),
                    format!("Test User {}", subject),
                ),
            ),
            Err(_) => self,
        }
    }

    /// Forces every verification to fail with `error`.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Registers a token at runtime.
    pub fn add_token(&self, token: impl Into<String>, claims: VerifiedClaims) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), claims);
    }

    pub fn token_count(&self) -> usize {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedClaims, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
