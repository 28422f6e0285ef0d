//! ListTripsHandler - Query handler for the requester's trips.

use std::sync::Arc;

use crate::application::OwnershipGate;
use crate::domain::foundation::VerifiedClaims;
use crate::domain::trip::{Trip, TripError};
use crate::ports::TripRepository;

/// Query for every trip the requester owns.
#[derive(Debug, Clone)]
pub struct ListTripsQuery {
    pub claims: VerifiedClaims,
}

/// Handler for listing trips.
pub struct ListTripsHandler {
    gate: Arc<OwnershipGate>,
    trips: Arc<dyn TripRepository>,
}

impl ListTripsHandler {
    pub fn new(gate: Arc<OwnershipGate>, trips: Arc<dyn TripRepository>) -> Self {
        Self { gate, trips }
    }

    pub async fn handle(&self, query: ListTripsQuery) -> Result<Vec<Trip>, TripError> {
        let user = self.gate.resolve(&query.claims).await?;
        Ok(self.trips.list_by_owner(user.id()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Fixture;

    #[tokio::test]
    async fn lists_only_requesters_trips() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let bob = fx.user("kc-bob").await;
        fx.trip_for(&alice, "Coast Drive").await;
        fx.trip_for(&bob, "Desert Loop").await;
        let handler = ListTripsHandler::new(fx.gate.clone(), fx.trips.clone());

        let trips = handler
            .handle(ListTripsQuery {
                claims: Fixture::claims("kc-alice"),
            })
            .await
            .unwrap();

        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].details().name(), "Coast Drive");
    }

    #[tokio::test]
    async fn new_identity_gets_empty_list() {
        let fx = Fixture::new();
        let handler = ListTripsHandler::new(fx.gate.clone(), fx.trips.clone());

        let trips = handler
            .handle(ListTripsQuery {
                claims: Fixture::claims("kc-new"),
            })
            .await
            .unwrap();

        assert!(trips.is_empty());
        assert_eq!(fx.store.user_count().await, 1);
    }
}
