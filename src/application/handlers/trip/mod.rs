//! Trip command and query handlers.

mod create_trip;
mod delete_trip;
mod get_trip;
mod list_trips;
mod update_trip;

pub use create_trip::{CreateTripCommand, CreateTripHandler};
pub use delete_trip::{DeleteTripCommand, DeleteTripHandler};
pub use get_trip::{GetTripHandler, GetTripQuery};
pub use list_trips::{ListTripsHandler, ListTripsQuery};
pub use update_trip::{UpdateTripCommand, UpdateTripHandler};
