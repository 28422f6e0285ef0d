//! Trip aggregate entity.
//!
//! Trips are the top-level container for a logged journey. Each trip belongs
//! to exactly one user and holds any number of locations.
//!
//! # Ownership
//!
//! Trips reference their locations only through `Location.trip_id`; deleting
//! a trip removes all of its locations with it.

use crate::domain::foundation::{EntryDetails, OwnedByUser, Timestamp, TripId, UserId};
use serde::{Deserialize, Serialize};

/// Trip aggregate - one logged journey.
///
/// # Invariants
///
/// - `id`, `owner_id` and `created_at` never change once set
/// - `details.name` is non-blank (enforced by `EntryDetails`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    id: TripId,
    owner_id: UserId,
    details: EntryDetails,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Trip {
    /// Create a new trip owned by `owner_id`, with a fresh id.
    pub fn new(owner_id: UserId, details: EntryDetails) -> Self {
        let now = Timestamp::now();
        Self {
            id: TripId::new(),
            owner_id,
            details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a trip from persistence (no validation).
    pub fn reconstitute(
        id: TripId,
        owner_id: UserId,
        details: EntryDetails,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            details,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &TripId {
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

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace every mutable field and bump `updated_at`.
    pub fn replace_details(&mut self, details: EntryDetails) {
        self.details = details;
        self.updated_at = Timestamp::now_after(&self.updated_at);
    }

    /// Copy the mutable fields of `other` onto this trip, keeping identity.
    ///
    /// Used by stores applying an update: `id`, `owner_id` and `created_at`
    /// of `self` win.
    pub fn overwrite_mutable_from(&mut self, other: &Trip) {
        self.details = other.details.clone();
        self.updated_at = other.updated_at;
    }
}

impl OwnedByUser for Trip {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}
