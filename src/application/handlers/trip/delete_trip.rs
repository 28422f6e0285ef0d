//! DeleteTripHandler - Command handler for deleting a trip and its locations.

use std::sync::Arc;

use crate::application::OwnershipGate;
use crate::domain::foundation::{TripId, VerifiedClaims};
use crate::domain::trip::TripError;
use crate::ports::TripRepository;

/// Command to delete a trip.
#[derive(Debug, Clone)]
pub struct DeleteTripCommand {
    pub claims: VerifiedClaims,
    pub trip_id: TripId,
}

/// Handler for deleting trips.
pub struct DeleteTripHandler {
    gate: Arc<OwnershipGate>,
    trips: Arc<dyn TripRepository>,
}

impl DeleteTripHandler {
    pub fn new(gate: Arc<OwnershipGate>, trips: Arc<dyn TripRepository>) -> Self {
        Self { gate, trips }
    }

    pub async fn handle(&self, cmd: DeleteTripCommand) -> Result<(), TripError> {
        let user = self.gate.resolve(&cmd.claims).await?;
        self.gate.authorize_trip(&user, &cmd.trip_id).await?;

        if !self.trips.delete(&cmd.trip_id, user.id()).await? {
            return Err(TripError::not_found(cmd.trip_id));
        }

        tracing::debug!(trip_id = %cmd.trip_id, user_id = %user.id(), "Trip deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Fixture;

    #[tokio::test]
    async fn delete_cascades_to_locations() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        let location = fx.location_under(&trip, "Big Sur").await;
        let handler = DeleteTripHandler::new(fx.gate.clone(), fx.trips.clone());

        handler
            .handle(DeleteTripCommand {
                claims: Fixture::claims("kc-alice"),
                trip_id: *trip.id(),
            })
            .await
            .unwrap();

        assert!(fx.trips.find_by_id(trip.id()).await.unwrap().is_none());
        assert!(fx.locations.find_by_id(location.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn non_owner_cannot_delete() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        let handler = DeleteTripHandler::new(fx.gate.clone(), fx.trips.clone());

        let result = handler
            .handle(DeleteTripCommand {
                claims: Fixture::claims("kc-bob"),
                trip_id: *trip.id(),
            })
            .await;

        assert_eq!(result, Err(TripError::Forbidden));
        assert_eq!(fx.store.trip_count().await, 1);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        let handler = DeleteTripHandler::new(fx.gate.clone(), fx.trips.clone());
        let cmd = DeleteTripCommand {
            claims: Fixture::claims("kc-alice"),
            trip_id: *trip.id(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let again = handler.handle(cmd).await;

        assert_eq!(again, Err(TripError::NotFound(*trip.id())));
    }
}
