//! PostgreSQL implementation of SessionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp, UserId};
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO chat_sessions (
                id, user_id, title, message_count, points_earned, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.user_id().as_str())
        .bind(session.title())
        .bind(session.message_count())
        .bind(session.points_earned())
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert session: {}", e)))?;

        Ok(())
    }

    async fn update(&self, session: &ChatSession) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE chat_sessions SET
                message_count = $2,
                points_earned = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.message_count())
        .bind(session.points_earned())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update session: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }

        Ok(())
    }

    async fn find_for_user(
        &self,
        id: &SessionId,
        user_id: &UserId,
    ) -> Result<Option<ChatSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, message_count, points_earned, created_at, updated_at
            FROM chat_sessions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch session: {}", e)))?;

        row.map(row_to_session).transpose()
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ChatSession>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, message_count, points_earned, created_at, updated_at
            FROM chat_sessions
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list sessions: {}", e)))?;

        rows.into_iter().map(row_to_session).collect()
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<ChatSession, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;

    let title: String = row
        .try_get("title")
        .map_err(|e| DomainError::database(format!("Failed to get title: {}", e)))?;

    let message_count: i32 = row
        .try_get("message_count")
        .map_err(|e| DomainError::database(format!("Failed to get message_count: {}", e)))?;

    let points_earned: i32 = row
        .try_get("points_earned")
        .map_err(|e| DomainError::database(format!("Failed to get points_earned: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?;

    Ok(ChatSession::reconstitute(
        SessionId::from_uuid(id),
        UserId::new(user_id)
            .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?,
        title,
        message_count,
        points_earned,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
