//! Point transaction ledger entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp, TransactionId, UserId};

/// Direction of a point transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Points gained.
    Earned,
    /// Points spent or deducted.
    Spent,
}

impl TransactionKind {
    /// Wire representation used in persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Earned => "earned",
            TransactionKind::Spent => "spent",
        }
    }
}

/// An immutable ledger entry recording a point gain or loss.
///
/// Transactions are append-only: never updated or deleted. The profile's
/// cached total is intended to equal the sum of a user's transactions.
#[derive(Debug, Clone)]
pub struct PointTransaction {
    id: TransactionId,
    user_id: UserId,
    session_id: Option<SessionId>,
    points: i32,
    kind: TransactionKind,
    description: String,
    created_at: Timestamp,
}

impl PointTransaction {
    /// Creates an earned transaction tied to a session.
    pub fn earned(
        user_id: UserId,
        session_id: SessionId,
        points: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            session_id: Some(session_id),
            points,
            kind: TransactionKind::Earned,
            description: description.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a transaction from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TransactionId,
        user_id: UserId,
        session_id: Option<SessionId>,
        points: i32,
        kind: TransactionKind,
        description: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            session_id,
            points,
            kind,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// Signed point delta. Positive for earned, negative for spent.
    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
