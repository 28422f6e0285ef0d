//! Ownership traits for user-owned resources.
//!
//! Trips carry their owner directly. Locations do not: their owner is derived
//! by following `trip_id -> Trip.owner_id`, so any ownership decision about a
//! location has to load the parent trip first.

use super::{DomainError, ErrorCode, TripId, UserId};

/// Trait for aggregates that have a single owner.
///
/// Implementors return the `UserId` of the owning user. The trait provides
/// default implementations for ownership checking.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, returning a `Forbidden` error if the user is not
    /// the owner.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User does not own this resource",
            )
            .with_detail("owner_id", self.owner_id().to_string())
            .with_detail("requested_by", user_id.to_string()))
        }
    }
}

/// Trait for aggregates whose ownership is inherited from a parent trip.
pub trait BelongsToTrip {
    /// Returns the ID of the parent trip.
    fn trip_id(&self) -> &TripId;

    /// Checks whether this resource sits under the given trip.
    fn belongs_to(&self, trip_id: &TripId) -> bool {
        self.trip_id() == trip_id
    }
}
