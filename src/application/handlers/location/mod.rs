//! Location command and query handlers.

mod create_location;
mod delete_location;
mod get_location;
mod list_locations;
mod update_location;

pub use create_location::{CreateLocationCommand, CreateLocationHandler};
pub use delete_location::{DeleteLocationCommand, DeleteLocationHandler};
pub use get_location::{GetLocationHandler, GetLocationQuery};
pub use list_locations::{ListLocationsHandler, ListLocationsQuery};
pub use update_location::{UpdateLocationCommand, UpdateLocationHandler};
