//! GetCurrentUserHandler - Query handler for the requester's own record.

use std::sync::Arc;

use crate::application::IdentityResolver;
use crate::domain::foundation::{DomainError, VerifiedClaims};
use crate::domain::user::User;

/// Query for the authenticated user's local record.
#[derive(Debug, Clone)]
pub struct GetCurrentUserQuery {
    pub claims: VerifiedClaims,
}

/// Handler for `/me`. Provisions the user on first call.
pub struct GetCurrentUserHandler {
    identity: Arc<IdentityResolver>,
}

impl GetCurrentUserHandler {
    pub fn new(identity: Arc<IdentityResolver>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self, query: GetCurrentUserQuery) -> Result<User, DomainError> {
        self.identity.resolve(&query.claims).await
    }
}
