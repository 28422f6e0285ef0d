//! HTTP adapter for trip endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::TripResponse;
pub use handlers::TripHandlers;
pub use routes::trip_routes;
