//! HTTP adapter for the `/me` endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::adapters::http::dto::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{GetCurrentUserHandler, GetCurrentUserQuery};
use crate::domain::user::User;

/// The requester's own local record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub id: String,
    pub external_subject_id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            external_subject_id: user.external_subject_id().to_string(),
            email: user.email().to_string(),
            display_name: user.display_name().to_string(),
            created_at: *user.created_at().as_datetime(),
        }
    }
}

/// GET /me
pub async fn get_current_user(
    State(handler): State<Arc<GetCurrentUserHandler>>,
    RequireAuth(claims): RequireAuth,
) -> Response {
    match handler.handle(GetCurrentUserQuery { claims }).await {
        Ok(user) => (StatusCode::OK, Json(CurrentUserResponse::from(&user))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to resolve current user");
            ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// `/me` route.
pub fn user_routes(handler: Arc<GetCurrentUserHandler>) -> Router {
    Router::new()
        .route("/me", get(get_current_user))
        .with_state(handler)
}
