//! HTTP DTOs for points endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::points::{PointTransaction, Profile};

/// Query parameters for GET /api/points/transactions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTransactionsQuery {
    /// Maximum number of transactions to return.
    pub limit: Option<u32>,
}

/// View of a user's point profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user_id: String,
    pub total_points: i64,
    pub updated_at: String,
}

impl From<&Profile> for ProfileView {
    fn from(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id().as_str().to_string(),
            total_points: profile.total_points(),
            updated_at: profile.updated_at().to_rfc3339(),
        }
    }
}

/// View of a single ledger entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub points: i32,
    pub transaction_type: &'static str,
    pub description: String,
    pub created_at: String,
}

impl From<&PointTransaction> for TransactionView {
    fn from(tx: &PointTransaction) -> Self {
        Self {
            id: tx.id().to_string(),
            session_id: tx.session_id().map(|id| id.to_string()),
            points: tx.points(),
            transaction_type: tx.kind().as_str(),
            description: tx.description().to_string(),
            created_at: tx.created_at().to_rfc3339(),
        }
    }
}
