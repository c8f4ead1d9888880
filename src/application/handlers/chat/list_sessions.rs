//! ListSessions query handler.

use std::sync::Arc;

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::SessionRepository;

/// Handler for listing a user's chat sessions.
pub struct ListSessionsHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Returns the user's sessions, most recently updated first.
    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<ChatSession>, DomainError> {
        self.sessions.list_for_user(user_id).await
    }
}
