//! User repository port.
//!
//! Users are looked up by the identity provider's subject on every request
//! and inserted once, on first sight. They are never updated here.

use crate::domain::foundation::{DomainError, SubjectId, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

/// Repository port for local user records.
///
/// Implementations must enforce uniqueness of `external_subject_id`. It is
/// the only guard against two concurrent first requests creating two users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by the identity provider's subject.
    ///
    /// Returns `None` if no local record exists yet.
    async fn find_by_subject(&self, subject: &SubjectId) -> Result<Option<User>, DomainError>;

    /// Find a user by local id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// - `DuplicateSubject` if a user with the same subject already exists
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;
}
