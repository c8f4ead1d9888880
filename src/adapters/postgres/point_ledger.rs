//! PostgreSQL implementation of PointLedger.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, SessionId, Timestamp, TransactionId, UserId};
use crate::domain::points::{PointTransaction, TransactionKind};
use crate::ports::PointLedger;

/// PostgreSQL implementation of PointLedger.
#[derive(Clone)]
pub struct PostgresPointLedger {
    pool: PgPool,
}

impl PostgresPointLedger {
    /// Creates a new PostgresPointLedger.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PointLedger for PostgresPointLedger {
    async fn record(&self, transaction: &PointTransaction) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO point_transactions (
                id, user_id, session_id, points, transaction_type, description, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(transaction.id().as_uuid())
        .bind(transaction.user_id().as_str())
        .bind(transaction.session_id().map(|s| *s.as_uuid()))
        .bind(transaction.points())
        .bind(transaction.kind().as_str())
        .bind(transaction.description())
        .bind(transaction.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert transaction: {}", e)))?;

        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<PointTransaction>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, session_id, points, transaction_type, description, created_at
            FROM point_transactions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list transactions: {}", e)))?;

        rows.into_iter().map(row_to_transaction).collect()
    }

    async fn sum_for_user(&self, user_id: &UserId) -> Result<i64, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(points), 0) FROM point_transactions WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to sum transactions: {}", e)))?;

        Ok(result.0)
    }
}

fn str_to_kind(s: &str) -> Result<TransactionKind, DomainError> {
    match s {
        "earned" => Ok(TransactionKind::Earned),
        "spent" => Ok(TransactionKind::Spent),
        _ => Err(DomainError::database(format!(
            "Invalid transaction type: {}",
            s
        ))),
    }
}

fn row_to_transaction(row: sqlx::postgres::PgRow) -> Result<PointTransaction, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;

    let session_id: Option<uuid::Uuid> = row
        .try_get("session_id")
        .map_err(|e| DomainError::database(format!("Failed to get session_id: {}", e)))?;

    let points: i32 = row
        .try_get("points")
        .map_err(|e| DomainError::database(format!("Failed to get points: {}", e)))?;

    let kind_str: String = row
        .try_get("transaction_type")
        .map_err(|e| DomainError::database(format!("Failed to get transaction_type: {}", e)))?;
    let kind = str_to_kind(&kind_str)?;

    let description: String = row
        .try_get("description")
        .map_err(|e| DomainError::database(format!("Failed to get description: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    Ok(PointTransaction::reconstitute(
        TransactionId::from_uuid(id),
        UserId::new(user_id)
            .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?,
        session_id.map(SessionId::from_uuid),
        points,
        kind,
        description,
        Timestamp::from_datetime(created_at),
    ))
}
