//! CreateTripHandler - Command handler for creating trips.

use std::sync::Arc;

use crate::application::handlers::EntryInput;
use crate::application::OwnershipGate;
use crate::domain::foundation::VerifiedClaims;
use crate::domain::trip::{Trip, TripError};
use crate::ports::TripRepository;

/// Command to create a trip owned by the requester.
#[derive(Debug, Clone)]
pub struct CreateTripCommand {
    pub claims: VerifiedClaims,
    pub input: EntryInput,
}

/// Handler for creating trips.
pub struct CreateTripHandler {
    gate: Arc<OwnershipGate>,
    trips: Arc<dyn TripRepository>,
}

impl CreateTripHandler {
    pub fn new(gate: Arc<OwnershipGate>, trips: Arc<dyn TripRepository>) -> Self {
        Self { gate, trips }
    }

    pub async fn handle(&self, cmd: CreateTripCommand) -> Result<Trip, TripError> {
        // 1. Validate before touching storage
        let details = cmd.input.validate()?;

        // 2. Resolve owner
        let user = self.gate.resolve(&cmd.claims).await?;

        // 3. Persist
        let trip = Trip::new(*user.id(), details);
        let trip = self.trips.create(&trip).await?;

        tracing::debug!(trip_id = %trip.id(), user_id = %user.id(), "Trip created");
        Ok(trip)
    }
}
