//! PostgreSQL implementation of MessageRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::chat::{ChatMessage, MessageRole};
use crate::domain::foundation::{DomainError, MessageId, SessionId, Timestamp, UserId};
use crate::ports::MessageRepository;

/// PostgreSQL implementation of MessageRepository.
#[derive(Clone)]
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    /// Creates a new PostgresMessageRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn save(&self, message: &ChatMessage) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO chat_messages (
                id, session_id, user_id, role, content, points_awarded, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(message.id().as_uuid())
        .bind(message.session_id().as_uuid())
        .bind(message.user_id().as_str())
        .bind(message.role().as_str())
        .bind(message.content())
        .bind(message.points_awarded())
        .bind(message.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert message: {}", e)))?;

        Ok(())
    }

    async fn history(
        &self,
        session_id: &SessionId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, user_id, role, content, points_awarded, created_at
            FROM chat_messages
            WHERE session_id = $1
            ORDER BY created_at ASC
            LIMIT $2
            "#,
        )
        .bind(session_id.as_uuid())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch history: {}", e)))?;

        rows.into_iter().map(row_to_message).collect()
    }
}

fn str_to_role(s: &str) -> Result<MessageRole, DomainError> {
    match s {
        "user" => Ok(MessageRole::User),
        "assistant" => Ok(MessageRole::Assistant),
        _ => Err(DomainError::database(format!("Invalid message role: {}", s))),
    }
}

fn row_to_message(row: sqlx::postgres::PgRow) -> Result<ChatMessage, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

    let session_id: uuid::Uuid = row
        .try_get("session_id")
        .map_err(|e| DomainError::database(format!("Failed to get session_id: {}", e)))?;

    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;

    let role_str: String = row
        .try_get("role")
        .map_err(|e| DomainError::database(format!("Failed to get role: {}", e)))?;
    let role = str_to_role(&role_str)?;

    let content: String = row
        .try_get("content")
        .map_err(|e| DomainError::database(format!("Failed to get content: {}", e)))?;

    let points_awarded: Option<i32> = row
        .try_get("points_awarded")
        .map_err(|e| DomainError::database(format!("Failed to get points_awarded: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    Ok(ChatMessage::reconstitute(
        MessageId::from_uuid(id),
        SessionId::from_uuid(session_id),
        UserId::new(user_id)
            .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?,
        role,
        content,
        points_awarded,
        Timestamp::from_datetime(created_at),
    ))
}
