//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::points::Profile;
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new PostgresProfileRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, total_points, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch profile: {}", e)))?;

        row.map(row_to_profile).transpose()
    }

    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, total_points, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(profile.user_id().as_str())
        .bind(profile.total_points())
        .bind(profile.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert profile: {}", e)))?;

        Ok(())
    }

    async fn update_total(&self, profile: &Profile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET
                total_points = $2,
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(profile.user_id().as_str())
        .bind(profile.total_points())
        .bind(profile.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update profile: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", profile.user_id()),
            ));
        }

        Ok(())
    }
}

fn row_to_profile(row: sqlx::postgres::PgRow) -> Result<Profile, DomainError> {
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;

    let total_points: i64 = row
        .try_get("total_points")
        .map_err(|e| DomainError::database(format!("Failed to get total_points: {}", e)))?;

    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?;

    Ok(Profile::reconstitute(
        UserId::new(user_id)
            .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?,
        total_points,
        Timestamp::from_datetime(updated_at),
    ))
}
