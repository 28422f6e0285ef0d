//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, timestamp};
use crate::domain::foundation::{DomainError, ErrorCode, SubjectId, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_USER: &str = r#"
    SELECT id, external_subject_id, email, display_name, created_at
    FROM users
"#;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_subject(&self, subject: &SubjectId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE external_subject_id = $1", SELECT_USER))
            .bind(subject.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch user by subject", e))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_USER))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch user", e))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, external_subject_id, email, display_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.external_subject_id().as_str())
        .bind(user.email())
        .bind(user.display_name())
        .bind(user.created_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DomainError::new(
                    ErrorCode::DuplicateSubject,
                    format!(
                        "User already exists for subject {}",
                        user.external_subject_id()
                    ),
                ))
            }
            Err(e) => Err(DomainError::database("Failed to insert user", e)),
        }
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let subject: String = column(row, "external_subject_id")?;
    let email: String = column(row, "email")?;
    let display_name: String = column(row, "display_name")?;

    let subject = SubjectId::new(subject)
        .map_err(|e| DomainError::database("Invalid external_subject_id", e))?;

    Ok(User::reconstitute(
        UserId::from_uuid(id),
        subject,
        email,
        display_name,
        timestamp(row, "created_at")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::VerifiedClaims;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.expect("connect");
        sqlx::migrate!("./migrations").run(&pool).await.expect("migrate");
        pool
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn save_then_find_by_subject() {
        let repo = PostgresUserRepository::new(test_pool().await);
        let subject = format!("pg-test-{}", uuid::Uuid::new_v4());
        let user = User::provision(&VerifiedClaims::new(
            SubjectId::new(subject.clone()).unwrap(),
            "pg@example.com",
            "pg",
        ));

        repo.save(&user).await.unwrap();
        let found = repo
            .find_by_subject(&SubjectId::new(subject).unwrap())
            .await
            .unwrap();

        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn second_insert_for_same_subject_is_duplicate() {
        let repo = PostgresUserRepository::new(test_pool().await);
        let subject = SubjectId::new(format!("pg-dup-{}", uuid::Uuid::new_v4())).unwrap();
        let claims = VerifiedClaims::new(subject, "", "");

        repo.save(&User::provision(&claims)).await.unwrap();
        let err = repo.save(&User::provision(&claims)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateSubject);
    }
}
