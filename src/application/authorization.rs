//! Ownership gate.
//!
//! The single place where trust decisions are made. Repositories never check
//! ownership on reads; every handler goes through this gate first.
//!
//! # Decision order
//!
//! Trip-scoped: resolve user, load trip (absent: `NotFound`), compare owner
//! (mismatch: `Forbidden`).
//!
//! Location-scoped: the trip checks above, then load the location by id
//! alone. Absent, or present under a different trip: `NotFound`. A probe for
//! a location under someone else's trip stops at `Forbidden` before the
//! location is ever looked up.

use std::sync::Arc;

use crate::domain::foundation::{
    BelongsToTrip, DomainError, LocationId, OwnedByUser, TripId, VerifiedClaims,
};
use crate::domain::location::{Location, LocationError};
use crate::domain::trip::{Trip, TripError};
use crate::domain::user::User;
use crate::ports::{LocationRepository, TripRepository};

use super::IdentityResolver;

/// Per-request ownership checks over trips and locations.
pub struct OwnershipGate {
    identity: Arc<IdentityResolver>,
    trips: Arc<dyn TripRepository>,
    locations: Arc<dyn LocationRepository>,
}

impl OwnershipGate {
    pub fn new(
        identity: Arc<IdentityResolver>,
        trips: Arc<dyn TripRepository>,
        locations: Arc<dyn LocationRepository>,
    ) -> Self {
        Self {
            identity,
            trips,
            locations,
        }
    }

    /// Resolve the requesting user.
    pub async fn resolve(&self, claims: &VerifiedClaims) -> Result<User, DomainError> {
        self.identity.resolve(claims).await
    }

    /// Load `trip_id` and require that `user` owns it.
    pub async fn authorize_trip(&self, user: &User, trip_id: &TripId) -> Result<Trip, TripError> {
        let trip = self
            .trips
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| TripError::not_found(*trip_id))?;

        if !trip.is_owner(user.id()) {
            tracing::warn!(
                user_id = %user.id(),
                trip_id = %trip_id,
                "Trip access denied: requester is not the owner"
            );
            return Err(TripError::forbidden());
        }

        Ok(trip)
    }

    /// Trip checks for a location-scoped request, reported as location errors.
    pub async fn authorize_parent_trip(
        &self,
        user: &User,
        trip_id: &TripId,
    ) -> Result<Trip, LocationError> {
        self.authorize_trip(user, trip_id)
            .await
            .map_err(|err| match err {
                TripError::NotFound(id) => LocationError::trip_not_found(id),
                TripError::Forbidden => LocationError::forbidden(),
                TripError::ValidationFailed { field, message } => {
                    LocationError::validation(field, message)
                }
                TripError::Infrastructure(msg) => LocationError::infrastructure(msg),
            })
    }

    /// Full location check: parent trip ownership, then location membership.
    pub async fn authorize_location(
        &self,
        user: &User,
        trip_id: &TripId,
        location_id: &LocationId,
    ) -> Result<Location, LocationError> {
        self.authorize_parent_trip(user, trip_id).await?;

        match self.locations.find_by_id(location_id).await? {
            Some(location) if location.belongs_to(trip_id) => Ok(location),
            Some(_) => {
                tracing::debug!(
                    trip_id = %trip_id,
                    location_id = %location_id,
                    "Location addressed through a trip it does not belong to"
                );
                Err(LocationError::not_found(*location_id))
            }
            None => Err(LocationError::not_found(*location_id)),
        }
    }
}
