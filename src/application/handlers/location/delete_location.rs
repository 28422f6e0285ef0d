//! DeleteLocationHandler - Command handler for removing a location.

use std::sync::Arc;

use crate::application::OwnershipGate;
use crate::domain::foundation::{LocationId, TripId, VerifiedClaims};
use crate::domain::location::LocationError;
use crate::ports::LocationRepository;

/// Command to delete a location through its parent trip.
#[derive(Debug, Clone)]
pub struct DeleteLocationCommand {
    pub claims: VerifiedClaims,
    pub trip_id: TripId,
    pub location_id: LocationId,
}

/// Handler for deleting locations.
pub struct DeleteLocationHandler {
    gate: Arc<OwnershipGate>,
    locations: Arc<dyn LocationRepository>,
}

impl DeleteLocationHandler {
    pub fn new(gate: Arc<OwnershipGate>, locations: Arc<dyn LocationRepository>) -> Self {
        Self { gate, locations }
    }

    pub async fn handle(&self, cmd: DeleteLocationCommand) -> Result<(), LocationError> {
        let user = self.gate.resolve(&cmd.claims).await?;
        self.gate
            .authorize_location(&user, &cmd.trip_id, &cmd.location_id)
            .await?;

        if !self.locations.delete(&cmd.location_id, &cmd.trip_id).await? {
            return Err(LocationError::not_found(cmd.location_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Fixture;

    #[tokio::test]
    async fn owner_deletes_location() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        let location = fx.location_under(&trip, "Big Sur").await;
        let handler = DeleteLocationHandler::new(fx.gate.clone(), fx.locations.clone());

        handler
            .handle(DeleteLocationCommand {
                claims: Fixture::claims("kc-alice"),
                trip_id: *trip.id(),
                location_id: *location.id(),
            })
            .await
            .unwrap();

        assert_eq!(fx.store.location_count().await, 0);
        assert_eq!(fx.store.trip_count().await, 1);
    }

    #[tokio::test]
    async fn non_owner_is_forbidden() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        let location = fx.location_under(&trip, "Big Sur").await;
        let handler = DeleteLocationHandler::new(fx.gate.clone(), fx.locations.clone());

        let result = handler
            .handle(DeleteLocationCommand {
                claims: Fixture::claims("kc-bob"),
                trip_id: *trip.id(),
                location_id: *location.id(),
            })
            .await;

        assert_eq!(result, Err(LocationError::Forbidden));
        assert_eq!(fx.store.location_count().await, 1);
    }
}
