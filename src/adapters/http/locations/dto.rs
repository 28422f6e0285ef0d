//! Location response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::foundation::BelongsToTrip;
use crate::domain::location::Location;

/// A location as returned to the owner of its trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Location> for LocationResponse {
    fn from(location: &Location) -> Self {
        let details = location.details();
        Self {
            id: location.id().to_string(),
            trip_id: location.trip_id().to_string(),
            name: details.name().to_string(),
            description: details.description().map(str::to_string),
            latitude: details.latitude(),
            longitude: details.longitude(),
            start_date: details.start_date(),
            end_date: details.end_date(),
            created_at: *location.created_at().as_datetime(),
            updated_at: *location.updated_at().as_datetime(),
        }
    }
}
