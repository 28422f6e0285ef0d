//! Identity resolution.
//!
//! Maps verified claims to a local user, creating the user on first sight.
//! Nothing is cached between requests; every request resolves from the store.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, VerifiedClaims};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Resolves verified claims to a local `User`.
pub struct IdentityResolver {
    users: Arc<dyn UserRepository>,
}

impl IdentityResolver {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Return the user for `claims.subject`, provisioning one if absent.
    ///
    /// If a concurrent request inserts the same subject first, the store
    /// rejects our insert with `DuplicateSubject` and the winner's row is
    /// looked up once more and returned.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on store failure
    /// - `DuplicateSubject` only if the retried lookup still finds nothing
    pub async fn resolve(&self, claims: &VerifiedClaims) -> Result<User, DomainError> {
        // 1. Existing user wins, returned unchanged
        if let Some(user) = self.users.find_by_subject(&claims.subject).await? {
            return Ok(user);
        }

        // 2. Provision
        let user = User::provision(claims);
        match self.users.save(&user).await {
            Ok(()) => {
                tracing::info!(
                    user_id = %user.id(),
                    subject = %claims.subject,
                    "Provisioned new user"
                );
                Ok(user)
            }
            Err(err) if err.code == ErrorCode::DuplicateSubject => {
                // 3. Lost the race: someone else just created it
                tracing::debug!(subject = %claims.subject, "Subject provisioned concurrently, retrying lookup");
                self.users
                    .find_by_subject(&claims.subject)
                    .await?
                    .ok_or(err)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryStore, InMemoryUserRepository};
    use crate::domain::foundation::{SubjectId, UserId};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn claims(sub: &str) -> VerifiedClaims {
        VerifiedClaims::new(SubjectId::new(sub).unwrap(), "a@example.com", "alice")
    }

    #[tokio::test]
    async fn first_resolve_provisions_user() {
        let store = InMemoryStore::new();
        let resolver = IdentityResolver::new(Arc::new(InMemoryUserRepository::new(store.clone())));

        let user = resolver.resolve(&claims("kc-1")).await.unwrap();

        assert_eq!(user.external_subject_id().as_str(), "kc-1");
        assert_eq!(user.email(), "a@example.com");
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn resolving_twice_returns_same_user_and_one_row() {
        let store = InMemoryStore::new();
        let resolver = IdentityResolver::new(Arc::new(InMemoryUserRepository::new(store.clone())));

        let first = resolver.resolve(&claims("kc-1")).await.unwrap();
        let second = resolver.resolve(&claims("kc-1")).await.unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn existing_user_is_returned_unchanged() {
        let store = InMemoryStore::new();
        let resolver = IdentityResolver::new(Arc::new(InMemoryUserRepository::new(store)));

        let original = resolver.resolve(&claims("kc-1")).await.unwrap();
        let changed = VerifiedClaims::new(SubjectId::new("kc-1").unwrap(), "new@example.com", "new");
        let again = resolver.resolve(&changed).await.unwrap();

        assert_eq!(again, original);
    }

    #[tokio::test]
    async fn concurrent_first_requests_yield_one_user() {
        let store = InMemoryStore::new();
        let resolver = Arc::new(IdentityResolver::new(Arc::new(InMemoryUserRepository::new(
            store.clone(),
        ))));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = resolver.clone();
                tokio::spawn(async move { resolver.resolve(&claims("kc-race")).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(*handle.await.unwrap().unwrap().id());
        }

        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(store.user_count().await, 1);
    }

    /// Simulates losing the provisioning race: the first lookup misses, the
    /// insert collides, the second lookup finds the winner.
    struct RacingUserRepository {
        winner: User,
        lookups: AtomicUsize,
        saves: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepository for RacingUserRepository {
        async fn find_by_subject(&self, _subject: &SubjectId) -> Result<Option<User>, DomainError> {
            if self.lookups.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(None)
            } else {
                Ok(Some(self.winner.clone()))
            }
        }

        async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn save(&self, user: &User) -> Result<(), DomainError> {
            self.saves.lock().unwrap().push(user.clone());
            Err(DomainError::new(ErrorCode::DuplicateSubject, "taken"))
        }
    }

    #[tokio::test]
    async fn duplicate_on_save_retries_lookup_once() {
        let winner = User::provision(&claims("kc-1"));
        let repo = Arc::new(RacingUserRepository {
            winner: winner.clone(),
            lookups: AtomicUsize::new(0),
            saves: Mutex::new(Vec::new()),
        });
        let resolver = IdentityResolver::new(repo.clone());

        let user = resolver.resolve(&claims("kc-1")).await.unwrap();

        assert_eq!(user.id(), winner.id());
        assert_eq!(repo.lookups.load(Ordering::SeqCst), 2);
        assert_eq!(repo.saves.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let store = InMemoryStore::new();
        store.fail_with("connection refused").await;
        let resolver = IdentityResolver::new(Arc::new(InMemoryUserRepository::new(store)));

        let err = resolver.resolve(&claims("kc-1")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
