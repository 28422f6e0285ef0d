//! Trip repository port.
//!
//! A dumb data-access layer scoped by owner. `find_by_id` deliberately
//! ignores the owner; ownership decisions belong to the ownership gate.
//!
//! # Double-key writes
//!
//! `update` and `delete` match on BOTH id and owner. A wrong owner and a
//! missing id produce the same result (`None` / `false`), so the storage
//! layer never reveals whether another user's trip exists.

use crate::domain::foundation::{DomainError, TripId, UserId};
use crate::domain::trip::Trip;
use async_trait::async_trait;

/// Repository port for Trip persistence.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// All trips owned by `owner_id`. Order is not guaranteed.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Trip>, DomainError>;

    /// Find a trip by id alone. The owner is NOT checked.
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError>;

    /// Persist a new trip exactly as given and return it.
    async fn create(&self, trip: &Trip) -> Result<Trip, DomainError>;

    /// Overwrite the mutable fields of the trip matching both id and owner.
    ///
    /// Returns the stored trip, or `None` if nothing matched.
    async fn update(&self, trip: &Trip) -> Result<Option<Trip>, DomainError>;

    /// Delete the trip matching both id and owner, along with every location
    /// under it. Both go or neither does.
    ///
    /// Returns `false` if nothing matched.
    async fn delete(&self, id: &TripId, owner_id: &UserId) -> Result<bool, DomainError>;
}
