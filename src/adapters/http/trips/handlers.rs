//! HTTP handlers for trip endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dto::{json_rejection, EntryRequest, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    CreateTripCommand, CreateTripHandler, DeleteTripCommand, DeleteTripHandler, GetTripHandler,
    GetTripQuery, ListTripsHandler, ListTripsQuery, UpdateTripCommand, UpdateTripHandler,
};
use crate::domain::foundation::TripId;
use crate::domain::trip::TripError;

use super::dto::TripResponse;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TripHandlers {
    list_handler: Arc<ListTripsHandler>,
    get_handler: Arc<GetTripHandler>,
    create_handler: Arc<CreateTripHandler>,
    update_handler: Arc<UpdateTripHandler>,
    delete_handler: Arc<DeleteTripHandler>,
}

impl TripHandlers {
    pub fn new(
        list_handler: Arc<ListTripsHandler>,
        get_handler: Arc<GetTripHandler>,
        create_handler: Arc<CreateTripHandler>,
        update_handler: Arc<UpdateTripHandler>,
        delete_handler: Arc<DeleteTripHandler>,
    ) -> Self {
        Self {
            list_handler,
            get_handler,
            create_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /trips - List the requester's trips
pub async fn list_trips(
    State(handlers): State<TripHandlers>,
    RequireAuth(claims): RequireAuth,
) -> Response {
    match handlers.list_handler.handle(ListTripsQuery { claims }).await {
        Ok(trips) => {
            let body: Vec<TripResponse> = trips.iter().map(TripResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_trip_error(e),
    }
}

/// POST /trips - Create a trip
pub async fn create_trip(
    State(handlers): State<TripHandlers>,
    RequireAuth(claims): RequireAuth,
    body: Result<Json<EntryRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateTripCommand {
        claims,
        input: req.into(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(trip) => {
            let location = format!("/trips/{}", trip.id());
            (
                StatusCode::CREATED,
                [(LOCATION, location)],
                Json(TripResponse::from(&trip)),
            )
                .into_response()
        }
        Err(e) => handle_trip_error(e),
    }
}

/// GET /trips/:trip_id - Get one trip
pub async fn get_trip(
    State(handlers): State<TripHandlers>,
    RequireAuth(claims): RequireAuth,
    Path(trip_id): Path<String>,
) -> Response {
    let trip_id = match parse_trip_id(&trip_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetTripQuery { claims, trip_id }).await {
        Ok(trip) => (StatusCode::OK, Json(TripResponse::from(&trip))).into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// PUT /trips/:trip_id - Replace a trip's fields
pub async fn update_trip(
    State(handlers): State<TripHandlers>,
    RequireAuth(claims): RequireAuth,
    Path(trip_id): Path<String>,
    body: Result<Json<EntryRequest>, JsonRejection>,
) -> Response {
    let trip_id = match parse_trip_id(&trip_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = UpdateTripCommand {
        claims,
        trip_id,
        input: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(trip) => (StatusCode::OK, Json(TripResponse::from(&trip))).into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// DELETE /trips/:trip_id - Delete a trip and its locations
pub async fn delete_trip(
    State(handlers): State<TripHandlers>,
    RequireAuth(claims): RequireAuth,
    Path(trip_id): Path<String>,
) -> Response {
    let trip_id = match parse_trip_id(&trip_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteTripCommand { claims, trip_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_trip_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

/// A path segment that is not a UUID cannot name any trip.
fn parse_trip_id(raw: &str) -> Result<TripId, Response> {
    raw.parse::<TripId>().map_err(|_| {
        ErrorResponse::not_found("Trip", raw).into_response_with(StatusCode::NOT_FOUND)
    })
}

fn handle_trip_error(error: TripError) -> Response {
    match error {
        TripError::NotFound(id) => {
            ErrorResponse::not_found("Trip", &id.to_string()).into_response_with(StatusCode::NOT_FOUND)
        }
        TripError::Forbidden => {
            ErrorResponse::forbidden("Permission denied").into_response_with(StatusCode::FORBIDDEN)
        }
        TripError::ValidationFailed { field, message } => ErrorResponse::bad_request(format!(
            "Validation failed for {}: {}",
            field, message
        ))
        .into_response_with(StatusCode::BAD_REQUEST),
        TripError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Trip request failed in the store");
            ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
