//! Shared in-memory tables.
//!
//! All three tables sit behind a single lock, so a trip delete and its
//! location cascade are observed together or not at all.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, LocationId, TripId, UserId};
use crate::domain::location::Location;
use crate::domain::trip::Trip;
use crate::domain::user::User;

#[derive(Debug, Default)]
pub(super) struct Tables {
    pub users: HashMap<UserId, User>,
    pub trips: HashMap<TripId, Trip>,
    pub locations: HashMap<LocationId, Location>,
}

/// In-memory backing store shared by the memory repositories.
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    #[cfg(test)]
    failure: Arc<RwLock<Option<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a `DatabaseError`.
    #[cfg(test)]
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    /// Return to normal operation after `fail_with`.
    #[cfg(test)]
    pub async fn clear_failure(&self) {
        *self.failure.write().await = None;
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn trip_count(&self) -> usize {
        self.tables.read().await.trips.len()
    }

    pub async fn location_count(&self) -> usize {
        self.tables.read().await.locations.len()
    }

    pub(super) async fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DomainError> {
        self.check_failure().await?;
        Ok(self.tables.read().await)
    }

    pub(super) async fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DomainError> {
        self.check_failure().await?;
        Ok(self.tables.write().await)
    }

    #[cfg(test)]
    async fn check_failure(&self) -> Result<(), DomainError> {
        match self.failure.read().await.as_ref() {
            Some(message) => Err(DomainError::database("In-memory store failure", message)),
            None => Ok(()),
        }
    }

    #[cfg(not(test))]
    async fn check_failure(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
