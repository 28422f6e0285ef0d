//! In-memory implementation of UserRepository.

use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::foundation::{DomainError, ErrorCode, SubjectId, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// In-memory user repository. Enforces subject uniqueness like the
/// database's UNIQUE constraint.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

impl InMemoryUserRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_subject(&self, subject: &SubjectId) -> Result<Option<User>, DomainError> {
        let tables = self.store.read().await?;
        Ok(tables
            .users
            .values()
            .find(|u| u.external_subject_id() == subject)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let tables = self.store.read().await?;
        Ok(tables.users.get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut tables = self.store.write().await?;

        if tables
            .users
            .values()
            .any(|u| u.external_subject_id() == user.external_subject_id())
        {
            return Err(DomainError::new(
                ErrorCode::DuplicateSubject,
                format!(
                    "User already exists for subject {}",
                    user.external_subject_id()
                ),
            ));
        }

        tables.users.insert(*user.id(), user.clone());
        Ok(())
    }
}
