//! PostgreSQL implementation of TripRepository.
//!
//! Writes use the double-key predicate `id = $1 AND owner_id = $2`.
//! Deleting a trip removes its locations inside the same transaction.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, row_to_details, timestamp, DETAIL_COLUMNS};
use crate::domain::foundation::{DomainError, OwnedByUser, TripId, UserId};
use crate::domain::trip::Trip;
use crate::ports::TripRepository;

/// PostgreSQL implementation of TripRepository.
#[derive(Clone)]
pub struct PostgresTripRepository {
    pool: PgPool,
}

impl PostgresTripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn select_trips() -> String {
    format!(
        "SELECT id, owner_id, {}, created_at, updated_at FROM trips",
        DETAIL_COLUMNS
    )
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Trip>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE owner_id = $1 ORDER BY created_at",
            select_trips()
        ))
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch trips by owner", e))?;

        rows.iter().map(row_to_trip).collect()
    }

    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", select_trips()))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch trip", e))?;

        row.as_ref().map(row_to_trip).transpose()
    }

    async fn create(&self, trip: &Trip) -> Result<Trip, DomainError> {
        let details = trip.details();
        sqlx::query(&format!(
            r#"
            INSERT INTO trips (id, owner_id, {}, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
            DETAIL_COLUMNS
        ))
        .bind(trip.id().as_uuid())
        .bind(trip.owner_id().as_uuid())
        .bind(details.name())
        .bind(details.description())
        .bind(details.latitude())
        .bind(details.longitude())
        .bind(details.start_date())
        .bind(details.end_date())
        .bind(trip.created_at().as_datetime())
        .bind(trip.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert trip", e))?;

        Ok(trip.clone())
    }

    async fn update(&self, trip: &Trip) -> Result<Option<Trip>, DomainError> {
        let details = trip.details();
        let row = sqlx::query(
            r#"
            UPDATE trips SET
                name = $3,
                description = $4,
                latitude = $5,
                longitude = $6,
                start_date = $7,
                end_date = $8,
                updated_at = $9
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, name, description, latitude, longitude,
                      start_date, end_date, created_at, updated_at
            "#,
        )
        .bind(trip.id().as_uuid())
        .bind(trip.owner_id().as_uuid())
        .bind(details.name())
        .bind(details.description())
        .bind(details.latitude())
        .bind(details.longitude())
        .bind(details.start_date())
        .bind(details.end_date())
        .bind(trip.updated_at().as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update trip", e))?;

        row.as_ref().map(row_to_trip).transpose()
    }

    async fn delete(&self, id: &TripId, owner_id: &UserId) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to start transaction", e))?;

        // Lock the trip row first so the ownership predicate and the cascade
        // see the same state.
        let owned = sqlx::query("SELECT id FROM trips WHERE id = $1 AND owner_id = $2 FOR UPDATE")
            .bind(id.as_uuid())
            .bind(owner_id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to lock trip", e))?;

        if owned.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM locations WHERE trip_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete trip locations", e))?;

        sqlx::query("DELETE FROM trips WHERE id = $1 AND owner_id = $2")
            .bind(id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete trip", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(true)
    }
}

fn row_to_trip(row: &PgRow) -> Result<Trip, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let owner_id: uuid::Uuid = column(row, "owner_id")?;

    Ok(Trip::reconstitute(
        TripId::from_uuid(id),
        UserId::from_uuid(owner_id),
        row_to_details(row)?,
        timestamp(row, "created_at")?,
        timestamp(row, "updated_at")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::postgres::{PostgresLocationRepository, PostgresUserRepository};
    use crate::domain::foundation::{EntryDetails, SubjectId, VerifiedClaims};
    use crate::domain::location::Location;
    use crate::domain::user::User;
    use crate::ports::{LocationRepository, UserRepository};

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.expect("connect");
        sqlx::migrate!("./migrations").run(&pool).await.expect("migrate");
        pool
    }

    async fn seeded_user(pool: &PgPool) -> User {
        let subject = SubjectId::new(format!("pg-trip-{}", uuid::Uuid::new_v4())).unwrap();
        let user = User::provision(&VerifiedClaims::new(subject, "", ""));
        PostgresUserRepository::new(pool.clone())
            .save(&user)
            .await
            .unwrap();
        user
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn update_with_wrong_owner_returns_none() {
        let pool = test_pool().await;
        let repo = PostgresTripRepository::new(pool.clone());
        let owner = seeded_user(&pool).await;
        let trip = Trip::new(*owner.id(), EntryDetails::new("Coast Drive").unwrap());
        repo.create(&trip).await.unwrap();

        let intruder = Trip::reconstitute(
            *trip.id(),
            UserId::new(),
            EntryDetails::new("Hijacked").unwrap(),
            *trip.created_at(),
            *trip.updated_at(),
        );

        assert_eq!(repo.update(&intruder).await.unwrap(), None);
        let stored = repo.find_by_id(trip.id()).await.unwrap().unwrap();
        assert_eq!(stored.details().name(), "Coast Drive");
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn delete_cascades_to_locations() {
        let pool = test_pool().await;
        let trips = PostgresTripRepository::new(pool.clone());
        let locations = PostgresLocationRepository::new(pool.clone());
        let owner = seeded_user(&pool).await;

        let trip = Trip::new(*owner.id(), EntryDetails::new("Coast Drive").unwrap());
        trips.create(&trip).await.unwrap();
        let location = Location::new(*trip.id(), EntryDetails::new("Big Sur").unwrap());
        locations.create(&location).await.unwrap();

        assert!(trips.delete(trip.id(), owner.id()).await.unwrap());
        assert!(locations.find_by_id(location.id()).await.unwrap().is_none());
        assert!(!trips.delete(trip.id(), owner.id()).await.unwrap());
    }
}
