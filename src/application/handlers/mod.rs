//! Application handlers.
//!
//! One handler per operation. Each validates input, resolves the requester,
//! passes the ownership gate, and only then touches a repository.

mod input;
pub mod location;
pub mod trip;
pub mod user;

pub use input::EntryInput;
pub use location::{
    CreateLocationCommand, CreateLocationHandler, DeleteLocationCommand, DeleteLocationHandler,
    GetLocationHandler, GetLocationQuery, ListLocationsHandler, ListLocationsQuery,
    UpdateLocationCommand, UpdateLocationHandler,
};
pub use trip::{
    CreateTripCommand, CreateTripHandler, DeleteTripCommand, DeleteTripHandler, GetTripHandler,
    GetTripQuery, ListTripsHandler, ListTripsQuery, UpdateTripCommand, UpdateTripHandler,
};
pub use user::{GetCurrentUserHandler, GetCurrentUserQuery};
