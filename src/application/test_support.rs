//! Shared wiring for application-layer tests.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryLocationRepository, InMemoryStore, InMemoryTripRepository, InMemoryUserRepository,
};
use crate::domain::foundation::{EntryDetails, SubjectId, VerifiedClaims};
use crate::domain::location::Location;
use crate::domain::trip::Trip;
use crate::domain::user::User;
use crate::ports::{LocationRepository, TripRepository};

use super::{IdentityResolver, OwnershipGate};

pub(crate) struct Fixture {
    pub store: InMemoryStore,
    pub trips: Arc<dyn TripRepository>,
    pub locations: Arc<dyn LocationRepository>,
    pub gate: Arc<OwnershipGate>,
}

impl Fixture {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let users = Arc::new(InMemoryUserRepository::new(store.clone()));
        let trips: Arc<dyn TripRepository> = Arc::new(InMemoryTripRepository::new(store.clone()));
        let locations: Arc<dyn LocationRepository> =
            Arc::new(InMemoryLocationRepository::new(store.clone()));
        let gate = Arc::new(OwnershipGate::new(
            Arc::new(IdentityResolver::new(users)),
            trips.clone(),
            locations.clone(),
        ));

        Self {
            store,
            trips,
            locations,
            gate,
        }
    }

    pub fn claims(sub: &str) -> VerifiedClaims {
        VerifiedClaims::new(
            SubjectId::new(sub).unwrap(),
            format!("{}@example.com", sub),
            sub,
        )
    }

    pub async fn user(&self, sub: &str) -> User {
        self.gate.resolve(&Self::claims(sub)).await.unwrap()
    }

    pub async fn trip_for(&self, owner: &User, name: &str) -> Trip {
        let trip = Trip::new(*owner.id(), EntryDetails::new(name).unwrap());
        self.trips.create(&trip).await.unwrap()
    }

    pub async fn location_under(&self, trip: &Trip, name: &str) -> Location {
        let location = Location::new(*trip.id(), EntryDetails::new(name).unwrap());
        self.locations.create(&location).await.unwrap()
    }
}
