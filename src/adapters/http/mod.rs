//! HTTP adapter: the CampLog REST surface.
//!
//! Everything except `/health` sits behind the bearer-token middleware.
//! Trip and location routes share the `/trips` prefix so that `:trip_id`
//! resolves identically for both.

pub mod dto;
mod health;
pub mod locations;
pub mod middleware;
pub mod trips;
pub mod users;

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, LOCATION},
        HeaderValue, Method,
    },
    middleware::from_fn_with_state,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    CreateLocationHandler, CreateTripHandler, DeleteLocationHandler, DeleteTripHandler,
    GetCurrentUserHandler, GetLocationHandler, GetTripHandler, ListLocationsHandler,
    ListTripsHandler, UpdateLocationHandler, UpdateTripHandler,
};
use crate::application::{IdentityResolver, OwnershipGate};
use crate::config::ServerConfig;
use crate::ports::{LocationRepository, TokenVerifier, TripRepository, UserRepository};

pub use health::health_routes;
pub use locations::{location_routes, LocationHandlers};
pub use middleware::{auth_middleware, RequireAuth};
pub use trips::{trip_routes, TripHandlers};
pub use users::user_routes;

/// The ports the HTTP surface is wired against.
#[derive(Clone)]
pub struct ApiDependencies {
    pub users: Arc<dyn UserRepository>,
    pub trips: Arc<dyn TripRepository>,
    pub locations: Arc<dyn LocationRepository>,
    pub verifier: Arc<dyn TokenVerifier>,
}

/// Build the full API router without transport layers.
pub fn api_router(deps: ApiDependencies) -> Router {
    let identity = Arc::new(IdentityResolver::new(deps.users.clone()));
    let gate = Arc::new(OwnershipGate::new(
        identity.clone(),
        deps.trips.clone(),
        deps.locations.clone(),
    ));

    let trip_handlers = TripHandlers::new(
        Arc::new(ListTripsHandler::new(gate.clone(), deps.trips.clone())),
        Arc::new(GetTripHandler::new(gate.clone())),
        Arc::new(CreateTripHandler::new(gate.clone(), deps.trips.clone())),
        Arc::new(UpdateTripHandler::new(gate.clone(), deps.trips.clone())),
        Arc::new(DeleteTripHandler::new(gate.clone(), deps.trips.clone())),
    );

    let location_handlers = LocationHandlers::new(
        Arc::new(ListLocationsHandler::new(gate.clone(), deps.locations.clone())),
        Arc::new(GetLocationHandler::new(gate.clone())),
        Arc::new(CreateLocationHandler::new(gate.clone(), deps.locations.clone())),
        Arc::new(UpdateLocationHandler::new(gate.clone(), deps.locations.clone())),
        Arc::new(DeleteLocationHandler::new(gate, deps.locations.clone())),
    );

    let protected = Router::new()
        .nest(
            "/trips",
            trip_routes(trip_handlers).merge(location_routes(location_handlers)),
        )
        .merge(user_routes(Arc::new(GetCurrentUserHandler::new(identity))))
        .layer(from_fn_with_state(deps.verifier, auth_middleware));

    Router::new().merge(health_routes()).merge(protected)
}

/// Wrap a router with tracing, CORS and the request timeout.
pub fn with_service_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([LOCATION])
}
