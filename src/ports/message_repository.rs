//! Message repository port.

use async_trait::async_trait;

use crate::domain::chat::ChatMessage;
use crate::domain::foundation::{DomainError, SessionId};

/// Persistence port for chat messages.
///
/// Messages are append-only; there is no update or delete.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts a message.
    async fn save(&self, message: &ChatMessage) -> Result<(), DomainError>;

    /// Fetches up to `limit` messages of a session, oldest first.
    ///
    /// This is the model-context window for the completion call.
    async fn history(
        &self,
        session_id: &SessionId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, DomainError>;
}
