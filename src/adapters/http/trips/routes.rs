//! HTTP routes for trip endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_trip, delete_trip, get_trip, list_trips, update_trip, TripHandlers};

/// Trip routes, to be nested under `/trips`.
pub fn trip_routes(handlers: TripHandlers) -> Router {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route(
            "/:trip_id",
            get(get_trip).put(update_trip).delete(delete_trip),
        )
        .with_state(handlers)
}
