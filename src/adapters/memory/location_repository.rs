//! In-memory implementation of LocationRepository.

use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::foundation::{BelongsToTrip, DomainError, ErrorCode, LocationId, TripId};
use crate::domain::location::Location;
use crate::ports::LocationRepository;

/// In-memory location repository.
#[derive(Debug, Clone)]
pub struct InMemoryLocationRepository {
    store: InMemoryStore,
}

impl InMemoryLocationRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Location>, DomainError> {
        let tables = self.store.read().await?;
        let mut locations: Vec<Location> = tables
            .locations
            .values()
            .filter(|l| l.belongs_to(trip_id))
            .cloned()
            .collect();
        locations.sort_by_key(|l| *l.created_at());
        Ok(locations)
    }

    async fn find_by_id(&self, id: &LocationId) -> Result<Option<Location>, DomainError> {
        let tables = self.store.read().await?;
        Ok(tables.locations.get(id).cloned())
    }

    async fn create(&self, location: &Location) -> Result<Location, DomainError> {
        let mut tables = self.store.write().await?;
        if !tables.trips.contains_key(location.trip_id()) {
            return Err(DomainError::new(
                ErrorCode::TripNotFound,
                format!("Trip not found: {}", location.trip_id()),
            ));
        }
        tables.locations.insert(*location.id(), location.clone());
        Ok(location.clone())
    }

    async fn update(&self, location: &Location) -> Result<Option<Location>, DomainError> {
        let mut tables = self.store.write().await?;
        match tables.locations.get_mut(location.id()) {
            Some(stored) if stored.belongs_to(location.trip_id()) => {
                stored.overwrite_mutable_from(location);
                Ok(Some(stored.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: &LocationId, trip_id: &TripId) -> Result<bool, DomainError> {
        let mut tables = self.store.write().await?;
        let matches = tables
            .locations
            .get(id)
            .is_some_and(|l| l.belongs_to(trip_id));
        if matches {
            tables.locations.remove(id);
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTripRepository;
    use crate::domain::foundation::{EntryDetails, OwnedByUser, UserId};
    use crate::domain::trip::Trip;
    use crate::ports::TripRepository;

    struct Repos {
        trips: InMemoryTripRepository,
        locations: InMemoryLocationRepository,
    }

    fn repos() -> Repos {
        let store = InMemoryStore::new();
        Repos {
            trips: InMemoryTripRepository::new(store.clone()),
            locations: InMemoryLocationRepository::new(store),
        }
    }

    async fn stored_trip(repos: &Repos) -> Trip {
        let trip = Trip::new(UserId::new(), EntryDetails::new("Coast Drive").unwrap());
        repos.trips.create(&trip).await.unwrap()
    }

    fn location_under(trip_id: TripId, name: &str) -> Location {
        Location::new(trip_id, EntryDetails::new(name).unwrap())
    }

    #[tokio::test]
    async fn list_by_trip_filters_by_parent() {
        let repos = repos();
        let t1 = *stored_trip(&repos).await.id();
        let t2 = *stored_trip(&repos).await.id();
        repos.locations.create(&location_under(t1, "Big Sur")).await.unwrap();
        repos.locations.create(&location_under(t2, "Elsewhere")).await.unwrap();

        let found = repos.locations.list_by_trip(&t1).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].details().name(), "Big Sur");
    }

    #[tokio::test]
    async fn create_under_missing_trip_is_rejected() {
        let repos = repos();

        let err = repos
            .locations
            .create(&location_under(TripId::new(), "Nowhere"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::TripNotFound);
    }

    #[tokio::test]
    async fn create_after_trip_delete_leaves_no_orphan() {
        let repos = repos();
        let trip = stored_trip(&repos).await;
        assert!(repos.trips.delete(trip.id(), trip.owner_id()).await.unwrap());

        let result = repos
            .locations
            .create(&location_under(*trip.id(), "Big Sur"))
            .await;

        assert!(result.is_err());
        assert!(repos.locations.list_by_trip(trip.id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_under_other_trip_returns_none() {
        let repos = repos();
        let trip = stored_trip(&repos).await;
        let location = location_under(*trip.id(), "Big Sur");
        repos.locations.create(&location).await.unwrap();

        let moved = Location::reconstitute(
            *location.id(),
            TripId::new(),
            EntryDetails::new("Moved").unwrap(),
            *location.created_at(),
            *location.updated_at(),
        );

        assert_eq!(repos.locations.update(&moved).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_requires_matching_trip() {
        let repos = repos();
        let trip_id = *stored_trip(&repos).await.id();
        let location = location_under(trip_id, "Big Sur");
        repos.locations.create(&location).await.unwrap();

        assert!(!repos.locations.delete(location.id(), &TripId::new()).await.unwrap());
        assert!(repos.locations.delete(location.id(), &trip_id).await.unwrap());
        assert!(repos.locations.find_by_id(location.id()).await.unwrap().is_none());
    }
}
