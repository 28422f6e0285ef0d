//! CreateLocationHandler - Command handler for adding a location to a trip.

use std::sync::Arc;

use crate::application::handlers::EntryInput;
use crate::application::OwnershipGate;
use crate::domain::foundation::{ErrorCode, TripId, VerifiedClaims};
use crate::domain::location::{Location, LocationError};
use crate::ports::LocationRepository;

/// Command to create a location under a trip the requester owns.
#[derive(Debug, Clone)]
pub struct CreateLocationCommand {
    pub claims: VerifiedClaims,
    pub trip_id: TripId,
    pub input: EntryInput,
}

/// Handler for creating locations.
pub struct CreateLocationHandler {
    gate: Arc<OwnershipGate>,
    locations: Arc<dyn LocationRepository>,
}

impl CreateLocationHandler {
    pub fn new(gate: Arc<OwnershipGate>, locations: Arc<dyn LocationRepository>) -> Self {
        Self { gate, locations }
    }

    pub async fn handle(&self, cmd: CreateLocationCommand) -> Result<Location, LocationError> {
        // 1. Validate before touching storage
        let details = cmd.input.validate()?;

        // 2. Gate on the parent trip
        let user = self.gate.resolve(&cmd.claims).await?;
        self.gate.authorize_parent_trip(&user, &cmd.trip_id).await?;

        // 3. Persist; the trip may have been deleted since the gate passed
        let location = Location::new(cmd.trip_id, details);
        self.locations
            .create(&location)
            .await
            .map_err(|err| match err.code {
                ErrorCode::TripNotFound => LocationError::trip_not_found(cmd.trip_id),
                _ => err.into(),
            })
    }
}
