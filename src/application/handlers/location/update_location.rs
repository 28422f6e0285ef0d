//! UpdateLocationHandler - Command handler for replacing a location's fields.

use std::sync::Arc;

use crate::application::handlers::EntryInput;
use crate::application::OwnershipGate;
use crate::domain::foundation::{LocationId, TripId, VerifiedClaims};
use crate::domain::location::{Location, LocationError};
use crate::ports::LocationRepository;

/// Command to overwrite every mutable field of a location.
#[derive(Debug, Clone)]
pub struct UpdateLocationCommand {
    pub claims: VerifiedClaims,
    pub trip_id: TripId,
    pub location_id: LocationId,
    pub input: EntryInput,
}

/// Handler for updating locations.
pub struct UpdateLocationHandler {
    gate: Arc<OwnershipGate>,
    locations: Arc<dyn LocationRepository>,
}

impl UpdateLocationHandler {
    pub fn new(gate: Arc<OwnershipGate>, locations: Arc<dyn LocationRepository>) -> Self {
        Self { gate, locations }
    }

    pub async fn handle(&self, cmd: UpdateLocationCommand) -> Result<Location, LocationError> {
        // 1. Validate
        let details = cmd.input.validate()?;

        // 2. Gate
        let user = self.gate.resolve(&cmd.claims).await?;
        let mut location = self
            .gate
            .authorize_location(&user, &cmd.trip_id, &cmd.location_id)
            .await?;

        // 3. Double-key write, scoped by the path's trip
        location.replace_details(details);
        self.locations
            .update(&location)
            .await?
            .ok_or_else(|| LocationError::not_found(cmd.location_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Fixture;

    #[tokio::test]
    async fn owner_renames_location() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let trip = fx.trip_for(&alice, "Coast Drive").await;
        let location = fx.location_under(&trip, "Big Sur").await;
        let handler = UpdateLocationHandler::new(fx.gate.clone(), fx.locations.clone());

        let updated = handler
            .handle(UpdateLocationCommand {
                claims: Fixture::claims("kc-alice"),
                trip_id: *trip.id(),
                location_id: *location.id(),
                input: EntryInput {
                    name: "Bixby Bridge".to_string(),
                    latitude: Some(36.37),
                    longitude: Some(-121.9),
                    ..EntryInput::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.details().name(), "Bixby Bridge");
        assert_eq!(updated.details().latitude(), Some(36.37));
        assert_eq!(updated.created_at(), location.created_at());
    }

    #[tokio::test]
    async fn wrong_trip_in_path_is_not_found_and_unchanged() {
        let fx = Fixture::new();
        let alice = fx.user("kc-alice").await;
        let t1 = fx.trip_for(&alice, "T1").await;
        let t2 = fx.trip_for(&alice, "T2").await;
        let location = fx.location_under(&t1, "Big Sur").await;
        let handler = UpdateLocationHandler::new(fx.gate.clone(), fx.locations.clone());

        let result = handler
            .handle(UpdateLocationCommand {
                claims: Fixture::claims("kc-alice"),
                trip_id: *t2.id(),
                location_id: *location.id(),
                input: EntryInput::named("Moved"),
            })
            .await;

        assert_eq!(result, Err(LocationError::NotFound(*location.id())));
        let stored = fx.locations.find_by_id(location.id()).await.unwrap().unwrap();
        assert_eq!(stored.details().name(), "Big Sur");
    }
}
