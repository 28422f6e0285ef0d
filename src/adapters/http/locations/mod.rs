//! HTTP adapter for location endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::LocationResponse;
pub use handlers::LocationHandlers;
pub use routes::location_routes;
