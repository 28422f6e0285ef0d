//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - Users, unique on external subject
//! - `PostgresTripRepository` - Trips, with transactional cascade delete
//! - `PostgresLocationRepository` - Locations

mod location_repository;
mod rows;
mod trip_repository;
mod user_repository;

pub use location_repository::PostgresLocationRepository;
pub use trip_repository::PostgresTripRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::PgPool;

use crate::domain::foundation::DomainError;

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))
}
