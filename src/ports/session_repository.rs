//! Session repository port.

use async_trait::async_trait;

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{DomainError, SessionId, UserId};

/// Persistence port for chat sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Inserts a new session.
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError>;

    /// Updates an existing session's title, message count, and points.
    ///
    /// Returns `ErrorCode::SessionNotFound` if no row was updated.
    async fn update(&self, session: &ChatSession) -> Result<(), DomainError>;

    /// Finds a session by id, scoped to its owning user.
    ///
    /// Returns `None` both when the session does not exist and when it
    /// belongs to a different user; callers cannot distinguish the two.
    async fn find_for_user(
        &self,
        id: &SessionId,
        user_id: &UserId,
    ) -> Result<Option<ChatSession>, DomainError>;

    /// Lists a user's sessions, most recently updated first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ChatSession>, DomainError>;
}
