//! Point ledger port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::points::PointTransaction;

/// Append-only persistence port for point transactions.
#[async_trait]
pub trait PointLedger: Send + Sync {
    /// Appends a transaction to the ledger.
    async fn record(&self, transaction: &PointTransaction) -> Result<(), DomainError>;

    /// Lists a user's transactions, most recent first, bounded by `limit`.
    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<PointTransaction>, DomainError>;

    /// Sums all transaction points for a user.
    ///
    /// The authoritative total; the profile's cached total should match it
    /// when every write in an exchange succeeds.
    async fn sum_for_user(&self, user_id: &UserId) -> Result<i64, DomainError>;
}
