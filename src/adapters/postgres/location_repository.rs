//! PostgreSQL implementation of LocationRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, row_to_details, timestamp, DETAIL_COLUMNS};
use crate::domain::foundation::{BelongsToTrip, DomainError, ErrorCode, LocationId, TripId};
use crate::domain::location::Location;
use crate::ports::LocationRepository;

/// PostgreSQL implementation of LocationRepository.
#[derive(Clone)]
pub struct PostgresLocationRepository {
    pool: PgPool,
}

impl PostgresLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn select_locations() -> String {
    format!(
        "SELECT id, trip_id, {}, created_at, updated_at FROM locations",
        DETAIL_COLUMNS
    )
}

#[async_trait]
impl LocationRepository for PostgresLocationRepository {
    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Location>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE trip_id = $1 ORDER BY created_at",
            select_locations()
        ))
        .bind(trip_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch locations by trip", e))?;

        rows.iter().map(row_to_location).collect()
    }

    async fn find_by_id(&self, id: &LocationId) -> Result<Option<Location>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", select_locations()))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch location", e))?;

        row.as_ref().map(row_to_location).transpose()
    }

    async fn create(&self, location: &Location) -> Result<Location, DomainError> {
        let details = location.details();
        let result = sqlx::query(&format!(
            r#"
            INSERT INTO locations (id, trip_id, {}, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
            DETAIL_COLUMNS
        ))
        .bind(location.id().as_uuid())
        .bind(location.trip_id().as_uuid())
        .bind(details.name())
        .bind(details.description())
        .bind(details.latitude())
        .bind(details.longitude())
        .bind(details.start_date())
        .bind(details.end_date())
        .bind(location.created_at().as_datetime())
        .bind(location.updated_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(location.clone()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(DomainError::new(
                    ErrorCode::TripNotFound,
                    format!("Trip not found: {}", location.trip_id()),
                ))
            }
            Err(e) => Err(DomainError::database("Failed to insert location", e)),
        }
    }

    async fn update(&self, location: &Location) -> Result<Option<Location>, DomainError> {
        let details = location.details();
        let row = sqlx::query(
            r#"
            UPDATE locations SET
                name = $3,
                description = $4,
                latitude = $5,
                longitude = $6,
                start_date = $7,
                end_date = $8,
                updated_at = $9
            WHERE id = $1 AND trip_id = $2
            RETURNING id, trip_id, name, description, latitude, longitude,
                      start_date, end_date, created_at, updated_at
            "#,
        )
        .bind(location.id().as_uuid())
        .bind(location.trip_id().as_uuid())
        .bind(details.name())
        .bind(details.description())
        .bind(details.latitude())
        .bind(details.longitude())
        .bind(details.start_date())
        .bind(details.end_date())
        .bind(location.updated_at().as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update location", e))?;

        row.as_ref().map(row_to_location).transpose()
    }

    async fn delete(&self, id: &LocationId, trip_id: &TripId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1 AND trip_id = $2")
            .bind(id.as_uuid())
            .bind(trip_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete location", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_location(row: &PgRow) -> Result<Location, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let trip_id: uuid::Uuid = column(row, "trip_id")?;

    Ok(Location::reconstitute(
        LocationId::from_uuid(id),
        TripId::from_uuid(trip_id),
        row_to_details(row)?,
        timestamp(row, "created_at")?,
        timestamp(row, "updated_at")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntryDetails;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn create_under_missing_trip_is_trip_not_found() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.expect("connect");
        sqlx::migrate!("./migrations").run(&pool).await.expect("migrate");
        let repo = PostgresLocationRepository::new(pool);

        let orphan = Location::new(TripId::new(), EntryDetails::new("Nowhere").unwrap());
        let err = repo.create(&orphan).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::TripNotFound);
        assert!(repo.find_by_id(orphan.id()).await.unwrap().is_none());
    }
}
