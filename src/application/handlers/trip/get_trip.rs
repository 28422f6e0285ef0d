//! GetTripHandler - Query handler for a single trip.

use std::sync::Arc;

use crate::application::OwnershipGate;
use crate::domain::foundation::{TripId, VerifiedClaims};
use crate::domain::trip::{Trip, TripError};

/// Query to get a trip by ID.
#[derive(Debug, Clone)]
pub struct GetTripQuery {
    pub claims: VerifiedClaims,
    pub trip_id: TripId,
}

/// Handler for retrieving a trip.
pub struct GetTripHandler {
    gate: Arc<OwnershipGate>,
}

impl GetTripHandler {
    pub fn new(gate: Arc<OwnershipGate>) -> Self {
        Self { gate }
    }

    pub async fn handle(&self, query: GetTripQuery) -> Result<Trip, TripError> {
        let user = self.gate.resolve(&query.claims).await?;
        self.gate.authorize_trip(&user, &query.trip_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Fixture;

    #[tokio::test]
    async fn non_owner_gets_forbidden() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        let handler = GetTripHandler::new(fx.gate.clone());

        let result = handler
            .handle(GetTripQuery {
                claims: Fixture::claims("kc-bob"),
                trip_id: *trip.id(),
            })
            .await;

        assert_eq!(result, Err(TripError::Forbidden));
    }

    #[tokio::test]
    async fn owner_reads_trip() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        let handler = GetTripHandler::new(fx.gate.clone());

        let loaded = handler
            .handle(GetTripQuery {
                claims: Fixture::claims("kc-alice"),
                trip_id: *trip.id(),
            })
            .await
            .unwrap();

        assert_eq!(loaded, trip);
    }
}
