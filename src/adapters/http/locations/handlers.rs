//! HTTP handlers for location endpoints.
//!
//! Every route is nested under its parent trip. Path ids that are not
//! UUIDs are answered with 404, the same as ids that name nothing.

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
    CreateLocationCommand, CreateLocationHandler, DeleteLocationCommand, DeleteLocationHandler,
    GetLocationHandler, GetLocationQuery, ListLocationsHandler, ListLocationsQuery,
    UpdateLocationCommand, UpdateLocationHandler,
};
use crate::domain::foundation::{LocationId, TripId};
use crate::domain::location::LocationError;

use super::dto::LocationResponse;

#[derive(Clone)]
pub struct LocationHandlers {
    list_handler: Arc<ListLocationsHandler>,
    get_handler: Arc<GetLocationHandler>,
    create_handler: Arc<CreateLocationHandler>,
    update_handler: Arc<UpdateLocationHandler>,
    delete_handler: Arc<DeleteLocationHandler>,
}

impl LocationHandlers {
    pub fn new(
        list_handler: Arc<ListLocationsHandler>,
        get_handler: Arc<GetLocationHandler>,
        create_handler: Arc<CreateLocationHandler>,
        update_handler: Arc<UpdateLocationHandler>,
        delete_handler: Arc<DeleteLocationHandler>,
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

/// GET /trips/:trip_id/locations
pub async fn list_locations(
    State(handlers): State<LocationHandlers>,
    RequireAuth(claims): RequireAuth,
    Path(trip_id): Path<String>,
) -> Response {
    let trip_id = match parse_trip_id(&trip_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .list_handler
        .handle(ListLocationsQuery { claims, trip_id })
        .await
    {
        Ok(locations) => {
            let body: Vec<LocationResponse> =
                locations.iter().map(LocationResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_location_error(e),
    }
}

/// POST /trips/:trip_id/locations
pub async fn create_location(
    State(handlers): State<LocationHandlers>,
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

    let cmd = CreateLocationCommand {
        claims,
        trip_id,
        input: req.into(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(location) => {
            let href = format!("/trips/{}/locations/{}", trip_id, location.id());
            (
                StatusCode::CREATED,
                [(LOCATION, href)],
                Json(LocationResponse::from(&location)),
            )
                .into_response()
        }
        Err(e) => handle_location_error(e),
    }
}

/// GET /trips/:trip_id/locations/:location_id
pub async fn get_location(
    State(handlers): State<LocationHandlers>,
    RequireAuth(claims): RequireAuth,
    Path((trip_id, location_id)): Path<(String, String)>,
) -> Response {
    let (trip_id, location_id) = match parse_ids(&trip_id, &location_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let query = GetLocationQuery {
        claims,
        trip_id,
        location_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(location) => (StatusCode::OK, Json(LocationResponse::from(&location))).into_response(),
        Err(e) => handle_location_error(e),
    }
}

/// PUT /trips/:trip_id/locations/:location_id
pub async fn update_location(
    State(handlers): State<LocationHandlers>,
    RequireAuth(claims): RequireAuth,
    Path((trip_id, location_id)): Path<(String, String)>,
    body: Result<Json<EntryRequest>, JsonRejection>,
) -> Response {
    let (trip_id, location_id) = match parse_ids(&trip_id, &location_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = UpdateLocationCommand {
        claims,
        trip_id,
        location_id,
        input: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(location) => (StatusCode::OK, Json(LocationResponse::from(&location))).into_response(),
        Err(e) => handle_location_error(e),
    }
}

/// DELETE /trips/:trip_id/locations/:location_id
pub async fn delete_location(
    State(handlers): State<LocationHandlers>,
    RequireAuth(claims): RequireAuth,
    Path((trip_id, location_id)): Path<(String, String)>,
) -> Response {
    let (trip_id, location_id) = match parse_ids(&trip_id, &location_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = DeleteLocationCommand {
        claims,
        trip_id,
        location_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_location_error(e),
    }
}

fn parse_trip_id(raw: &str) -> Result<TripId, Response> {
    raw.parse::<TripId>().map_err(|_| {
        ErrorResponse::not_found("Trip", raw).into_response_with(StatusCode::NOT_FOUND)
    })
}

fn parse_ids(trip_id: &str, location_id: &str) -> Result<(TripId, LocationId), Response> {
    let trip_id = parse_trip_id(trip_id)?;
    let location_id = location_id.parse::<LocationId>().map_err(|_| {
        ErrorResponse::not_found("Location", location_id).into_response_with(StatusCode::NOT_FOUND)
    })?;
    Ok((trip_id, location_id))
}

fn handle_location_error(error: LocationError) -> Response {
    match error {
        LocationError::TripNotFound(id) => {
            ErrorResponse::not_found("Trip", &id.to_string()).into_response_with(StatusCode::NOT_FOUND)
        }
        LocationError::NotFound(id) => ErrorResponse::not_found("Location", &id.to_string())
            .into_response_with(StatusCode::NOT_FOUND),
        LocationError::Forbidden => {
            ErrorResponse::forbidden("Permission denied").into_response_with(StatusCode::FORBIDDEN)
        }
        LocationError::ValidationFailed { field, message } => ErrorResponse::bad_request(format!(
            "Validation failed for {}: {}",
            field, message
        ))
        .into_response_with(StatusCode::BAD_REQUEST),
        LocationError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Location request failed in the store");
            ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_not_found_and_location_not_found_are_both_404() {
        assert_eq!(
            handle_location_error(LocationError::TripNotFound(TripId::new())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            handle_location_error(LocationError::NotFound(LocationId::new())).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn forbidden_maps_to_403() {
        assert_eq!(
            handle_location_error(LocationError::Forbidden).status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn bad_location_id_is_404() {
        let trip = TripId::new().to_string();
        let response = parse_ids(&trip, "nope").unwrap_err();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
