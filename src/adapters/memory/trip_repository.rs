//! In-memory implementation of TripRepository.

use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::foundation::{BelongsToTrip, DomainError, OwnedByUser, TripId, UserId};
use crate::domain::trip::Trip;
use crate::ports::TripRepository;

/// In-memory trip repository.
#[derive(Debug, Clone)]
pub struct InMemoryTripRepository {
    store: InMemoryStore,
}

impl InMemoryTripRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Trip>, DomainError> {
        let tables = self.store.read().await?;
        let mut trips: Vec<Trip> = tables
            .trips
            .values()
            .filter(|t| t.owner_id() == owner_id)
            .cloned()
            .collect();
        trips.sort_by_key(|t| *t.created_at());
        Ok(trips)
    }

    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        let tables = self.store.read().await?;
        Ok(tables.trips.get(id).cloned())
    }

    async fn create(&self, trip: &Trip) -> Result<Trip, DomainError> {
        let mut tables = self.store.write().await?;
        tables.trips.insert(*trip.id(), trip.clone());
        Ok(trip.clone())
    }

    async fn update(&self, trip: &Trip) -> Result<Option<Trip>, DomainError> {
        let mut tables = self.store.write().await?;
        match tables.trips.get_mut(trip.id()) {
            Some(stored) if stored.owner_id() == trip.owner_id() => {
                stored.overwrite_mutable_from(trip);
                Ok(Some(stored.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: &TripId, owner_id: &UserId) -> Result<bool, DomainError> {
        let mut tables = self.store.write().await?;

        let owned = tables
            .trips
            .get(id)
            .is_some_and(|t| t.owner_id() == owner_id);
        if !owned {
            return Ok(false);
        }

        tables.trips.remove(id);
        tables.locations.retain(|_, l| l.trip_id() != id);
        Ok(true)
    }
}
