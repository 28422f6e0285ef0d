//! Row decoding shared by the trip and location repositories.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::{DomainError, EntryDetails, Timestamp};

/// Column list for the descriptive fields, in bind order `$3..=$8`.
pub(super) const DETAIL_COLUMNS: &str =
    "name, description, latitude, longitude, start_date, end_date";

/// Read a single column, mapping decode failures to `DatabaseError`.
pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

pub(super) fn row_to_details(row: &PgRow) -> Result<EntryDetails, DomainError> {
    let name: String = column(row, "name")?;
    let description: Option<String> = column(row, "description")?;
    let latitude: Option<f64> = column(row, "latitude")?;
    let longitude: Option<f64> = column(row, "longitude")?;
    let start_date: Option<NaiveDate> = column(row, "start_date")?;
    let end_date: Option<NaiveDate> = column(row, "end_date")?;

    Ok(EntryDetails::reconstitute(
        name,
        description,
        latitude,
        longitude,
        start_date,
        end_date,
    ))
}

pub(super) fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let value: DateTime<Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(value))
}
