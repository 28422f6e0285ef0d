//! UpdateTripHandler - Command handler for replacing a trip's fields.

use std::sync::Arc;

use crate::application::handlers::EntryInput;
use crate::application::OwnershipGate;
use crate::domain::foundation::{TripId, VerifiedClaims};
use crate::domain::trip::{Trip, TripError};
use crate::ports::TripRepository;

/// Command to overwrite every mutable field of a trip.
#[derive(Debug, Clone)]
pub struct UpdateTripCommand {
    pub claims: VerifiedClaims,
    pub trip_id: TripId,
    pub input: EntryInput,
}

/// Handler for updating trips.
pub struct UpdateTripHandler {
    gate: Arc<OwnershipGate>,
    trips: Arc<dyn TripRepository>,
}

impl UpdateTripHandler {
    pub fn new(gate: Arc<OwnershipGate>, trips: Arc<dyn TripRepository>) -> Self {
        Self { gate, trips }
    }

    pub async fn handle(&self, cmd: UpdateTripCommand) -> Result<Trip, TripError> {
        // 1. Validate
        let details = cmd.input.validate()?;

        // 2. Gate
        let user = self.gate.resolve(&cmd.claims).await?;
        let mut trip = self.gate.authorize_trip(&user, &cmd.trip_id).await?;

        // 3. Double-key write; a miss here means the trip vanished meanwhile
        trip.replace_details(details);
        self.trips
            .update(&trip)
            .await?
            .ok_or_else(|| TripError::not_found(cmd.trip_id))
    }
}
