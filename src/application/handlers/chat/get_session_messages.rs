//! GetSessionMessages query handler.

use std::sync::Arc;

use crate::domain::chat::ChatMessage;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UserId};
use crate::ports::{MessageRepository, SessionRepository};

/// Default number of messages returned for a session view.
const DEFAULT_MESSAGE_LIMIT: u32 = 100;

/// Handler for reading one session's messages.
pub struct GetSessionMessagesHandler {
    sessions: Arc<dyn SessionRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl GetSessionMessagesHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self { sessions, messages }
    }

    /// Returns the session's messages oldest first.
    ///
    /// Fails with `SessionNotFound` when the session does not exist or is
    /// owned by another user.
    pub async fn handle(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let session = self
            .sessions
            .find_for_user(session_id, user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SessionNotFound,
                    format!("Session not found: {}", session_id),
                )
            })?;

        self.messages
            .history(session.id(), DEFAULT_MESSAGE_LIMIT)
            .await
    }
}
