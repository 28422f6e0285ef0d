//! User entity.
//!
//! A user is the local record of an authenticated principal. It is created
//! exactly once, on the first request bearing a subject with no local record,
//! and never updated afterwards.

use crate::domain::foundation::{SubjectId, Timestamp, UserId, VerifiedClaims};
use serde::{Deserialize, Serialize};

/// Local user record keyed by the identity provider's subject.
///
/// # Invariants
///
/// - `external_subject_id` is unique across all users (enforced by the store)
/// - `email` and `display_name` are informational only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    external_subject_id: SubjectId,
    email: String,
    display_name: String,
    created_at: Timestamp,
}

impl User {
    /// Provision a new user from verified claims, with a fresh id.
    pub fn provision(claims: &VerifiedClaims) -> Self {
        Self {
            id: UserId::new(),
            external_subject_id: claims.subject.clone(),
            email: claims.email.clone(),
            display_name: claims.display_name.clone(),
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a user from persistence.
    pub fn reconstitute(
        id: UserId,
        external_subject_id: SubjectId,
        email: String,
        display_name: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            external_subject_id,
            email,
            display_name,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn external_subject_id(&self) -> &SubjectId {
        &self.external_subject_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_claims() -> VerifiedClaims {
        VerifiedClaims::new(SubjectId::new("kc-42").unwrap(), "a@example.com", "alice")
    }

    #[test]
    fn provision_copies_claims() {
        let user = User::provision(&test_claims());

        assert_eq!(user.external_subject_id().as_str(), "kc-42");
        assert_eq!(user.email(), "a@example.com");
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn provision_generates_distinct_ids() {
        let a = User::provision(&test_claims());
        let b = User::provision(&test_claims());
        assert_ne!(a.id(), b.id());
    }
}
