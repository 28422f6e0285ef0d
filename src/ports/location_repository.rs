//! Location repository port.
//!
//! Scoped by parent trip. Same double-key contract as `TripRepository`,
//! with `trip_id` in place of the owner.

use crate::domain::foundation::{DomainError, LocationId, TripId};
use crate::domain::location::Location;
use async_trait::async_trait;

/// Repository port for Location persistence.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// All locations under `trip_id`. Order is not guaranteed.
    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Location>, DomainError>;

    /// Find a location by id alone. The parent trip is NOT checked.
    async fn find_by_id(&self, id: &LocationId) -> Result<Option<Location>, DomainError>;

    /// Persist a new location exactly as given and return it.
    ///
    /// Fails with `TripNotFound` when the parent trip no longer exists.
    async fn create(&self, location: &Location) -> Result<Location, DomainError>;

    /// Overwrite the mutable fields of the location matching both id and trip.
    async fn update(&self, location: &Location) -> Result<Option<Location>, DomainError>;

    /// Delete the location matching both id and trip.
    async fn delete(&self, id: &LocationId, trip_id: &TripId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn LocationRepository) {}
    }
}
