//! HTTP routes for location endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_location, delete_location, get_location, list_locations, update_location,
    LocationHandlers,
};

/// Location routes, to be nested under `/trips` beside the trip routes.
pub fn location_routes(handlers: LocationHandlers) -> Router {
    Router::new()
        .route(
            "/:trip_id/locations",
            get(list_locations).post(create_location),
        )
        .route(
            "/:trip_id/locations/:location_id",
            get(get_location).put(update_location).delete(delete_location),
        )
        .with_state(handlers)
}
