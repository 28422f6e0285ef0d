//! ListLocationsHandler - Query handler for the locations of a trip.

use std::sync::Arc;

use crate::application::OwnershipGate;
use crate::domain::foundation::{TripId, VerifiedClaims};
use crate::domain::location::{Location, LocationError};
use crate::ports::LocationRepository;

/// Query for every location under a trip.
#[derive(Debug, Clone)]
pub struct ListLocationsQuery {
    pub claims: VerifiedClaims,
    pub trip_id: TripId,
}

/// Handler for listing locations.
pub struct ListLocationsHandler {
    gate: Arc<OwnershipGate>,
    locations: Arc<dyn LocationRepository>,
}

impl ListLocationsHandler {
    pub fn new(gate: Arc<OwnershipGate>, locations: Arc<dyn LocationRepository>) -> Self {
        Self { gate, locations }
    }

    pub async fn handle(&self, query: ListLocationsQuery) -> Result<Vec<Location>, LocationError> {
        let user = self.gate.resolve(&query.claims).await?;
        self.gate.authorize_parent_trip(&user, &query.trip_id).await?;
        Ok(self.locations.list_by_trip(&query.trip_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Fixture;

    #[tokio::test]
    async fn lists_locations_of_owned_trip() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        let other = fx.trip_for(&alice, "Desert Loop").await;
        fx.location_under(&trip, "Big Sur").await;
        fx.location_under(&trip, "Carmel").await;
        fx.location_under(&other, "Joshua Tree").await;
        let handler = ListLocationsHandler::new(fx.gate.clone(), fx.locations.clone());

        let locations = handler
            .handle(ListLocationsQuery {
                claims: Fixture::claims("kc-alice"),
                trip_id: *trip.id(),
            })
            .await
            .unwrap();

        assert_eq!(locations.len(), 2);
    }

    #[tokio::test]
    async fn foreign_trip_is_forbidden() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        fx.location_under(&trip, "Big Sur").await;
        let handler = ListLocationsHandler::new(fx.gate.clone(), fx.locations.clone());

        let result = handler
            .handle(ListLocationsQuery {
                claims: Fixture::claims("kc-bob"),
                trip_id: *trip.id(),
            })
            .await;

        assert_eq!(result, Err(LocationError::Forbidden));
    }
}
