//! Trip response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::trip::Trip;

/// A trip as returned to its owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Trip> for TripResponse {
    fn from(trip: &Trip) -> Self {
        let details = trip.details();
        Self {
            id: trip.id().to_string(),
            name: details.name().to_string(),
            description: details.description().map(str::to_string),
            latitude: details.latitude(),
            longitude: details.longitude(),
            start_date: details.start_date(),
            end_date: details.end_date(),
            created_at: *trip.created_at().as_datetime(),
            updated_at: *trip.updated_at().as_datetime(),
        }
    }
}
