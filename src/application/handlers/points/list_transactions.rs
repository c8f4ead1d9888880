//! ListTransactions query handler.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::points::PointTransaction;
use crate::ports::PointLedger;

/// Default page size for transaction history.
pub const DEFAULT_TRANSACTION_LIMIT: u32 = 50;

/// Handler for listing a user's point transactions.
pub struct ListTransactionsHandler {
    ledger: Arc<dyn PointLedger>,
}

impl ListTransactionsHandler {
    pub fn new(ledger: Arc<dyn PointLedger>) -> Self {
        Self { ledger }
    }

    /// Returns the user's transactions, most recent first.
    pub async fn handle(
        &self,
        user_id: &UserId,
        limit: Option<u32>,
    ) -> Result<Vec<PointTransaction>, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_TRANSACTION_LIMIT);
        self.ledger.list_for_user(user_id, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPointLedger;
    use crate::domain::foundation::SessionId;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[tokio::test]
    async fn lists_transactions_most_recent_first() {
        let ledger = Arc::new(InMemoryPointLedger::new());
        let session_id = SessionId::new();
        for points in [5, 1, 3] {
            let tx = PointTransaction::earned(test_user_id(), session_id, points, "test");
            ledger.record(&tx).await.unwrap();
        }

        let handler = ListTransactionsHandler::new(ledger);
        let transactions = handler.handle(&test_user_id(), None).await.unwrap();

        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].points(), 3);
        assert_eq!(transactions[2].points(), 5);
    }

    #[tokio::test]
    async fn respects_the_limit() {
        let ledger = Arc::new(InMemoryPointLedger::new());
        let session_id = SessionId::new();
        for _ in 0..10 {
            let tx = PointTransaction::earned(test_user_id(), session_id, 1, "test");
            ledger.record(&tx).await.unwrap();
        }

        let handler = ListTransactionsHandler::new(ledger);
        let transactions = handler.handle(&test_user_id(), Some(4)).await.unwrap();
        assert_eq!(transactions.len(), 4);
    }
}
