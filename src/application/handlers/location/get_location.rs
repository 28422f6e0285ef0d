//! GetLocationHandler - Query handler for a single location.

use std::sync::Arc;

use crate::application::OwnershipGate;
use crate::domain::foundation::{LocationId, TripId, VerifiedClaims};
use crate::domain::location::{Location, LocationError};

/// Query to get a location through its parent trip.
#[derive(Debug, Clone)]
pub struct GetLocationQuery {
    pub claims: VerifiedClaims,
    pub trip_id: TripId,
    pub location_id: LocationId,
}

/// Handler for retrieving a location.
pub struct GetLocationHandler {
    gate: Arc<OwnershipGate>,
}

impl GetLocationHandler {
    pub fn new(gate: Arc<OwnershipGate>) -> Self {
        Self { gate }
    }

    pub async fn handle(&self, query: GetLocationQuery) -> Result<Location, LocationError> {
        let user = self.gate.resolve(&query.claims).await?;
        self.gate
            .authorize_location(&user, &query.trip_id, &query.location_id)
            .await
    }
}
