//! Location entity.
//!
//! A location is one stop within a trip. It carries no owner of its own:
//! ownership is derived by following `trip_id` to the parent trip.

use crate::domain::foundation::{BelongsToTrip, EntryDetails, LocationId, Timestamp, TripId};
use serde::{Deserialize, Serialize};

/// One stop within a trip.
///
/// # Invariants
///
/// - `id`, `trip_id` and `created_at` never change once set
/// - `details.name` is non-blank (enforced by `EntryDetails`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    trip_id: TripId,
    details: EntryDetails,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Location {
    /// Create a new location under `trip_id`, with a fresh id.
    pub fn new(trip_id: TripId, details: EntryDetails) -> Self {
        let now = Timestamp::now();
        Self {
            id: LocationId::new(),
            trip_id,
            details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a location from persistence (no validation).
    pub fn reconstitute(
        id: LocationId,
        trip_id: TripId,
        details: EntryDetails,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            trip_id,
            details,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &LocationId {
        &self.id
    }

    pub fn details(&self) -> &EntryDetails {
        &self.details
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Replace every mutable field and bump `updated_at`.
    pub fn replace_details(&mut self, details: EntryDetails) {
        self.details = details;
        self.updated_at = Timestamp::now_after(&self.updated_at);
    }

    /// Copy the mutable fields of `other` onto this location, keeping
    /// `id`, `trip_id` and `created_at`.
    pub fn overwrite_mutable_from(&mut self, other: &Location) {
        self.details = other.details.clone();
        self.updated_at = other.updated_at;
    }
}

impl BelongsToTrip for Location {
    fn trip_id(&self) -> &TripId {
        &self.trip_id
    }
}
