//! In-memory adapter implementations.
//!
//! Used by the test suites and handy for local development without a
//! database. Each repository mirrors the ordering and scoping semantics of
//! its PostgreSQL counterpart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::chat::{ChatMessage, ChatSession};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UserId};
use crate::domain::points::{PointTransaction, Profile};
use crate::ports::{MessageRepository, PointLedger, ProfileRepository, SessionRepository};

/// In-memory session store.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, ChatSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetches a session without user scoping (test inspection).
    pub fn get(&self, id: &SessionId) -> Option<ChatSession> {
        self.sessions.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError> {
        self.sessions
            .write()
            .unwrap()
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &ChatSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().unwrap();
        if !sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_for_user(
        &self,
        id: &SessionId,
        user_id: &UserId,
    ) -> Result<Option<ChatSession>, DomainError> {
        Ok(self
            .sessions
            .read()
            .unwrap()
            .get(id)
            .filter(|s| s.user_id() == user_id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ChatSession>, DomainError> {
        let mut sessions: Vec<ChatSession> = self
            .sessions
            .read()
            .unwrap()
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(sessions)
    }
}

/// In-memory message store.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: RwLock<Vec<ChatMessage>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages across all sessions.
    pub fn len(&self) -> usize {
        self.messages.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: &ChatMessage) -> Result<(), DomainError> {
        self.messages.write().unwrap().push(message.clone());
        Ok(())
    }

    async fn history(
        &self,
        session_id: &SessionId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        // Insertion order doubles as creation order, matching the
        // ascending-timestamp fetch of the SQL adapter.
        Ok(self
            .messages
            .read()
            .unwrap()
            .iter()
            .filter(|m| m.session_id() == session_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// In-memory point ledger.
#[derive(Default)]
pub struct InMemoryPointLedger {
    entries: RwLock<Vec<PointTransaction>>,
}

impl InMemoryPointLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PointLedger for InMemoryPointLedger {
    async fn record(&self, transaction: &PointTransaction) -> Result<(), DomainError> {
        self.entries.write().unwrap().push(transaction.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<PointTransaction>, DomainError> {
        Ok(self
            .entries
            .read()
            .unwrap()
            .iter()
            .rev()
            .filter(|t| t.user_id() == user_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn sum_for_user(&self, user_id: &UserId) -> Result<i64, DomainError> {
        Ok(self
            .entries
            .read()
            .unwrap()
            .iter()
            .filter(|t| t.user_id() == user_id)
            .map(|t| t.points() as i64)
            .sum())
    }
}

/// In-memory profile store with write-failure injection for drift tests.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<String, Profile>>,
    fail_next_update: AtomicBool,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `update_total` call fail with a database error.
    pub fn fail_next_update(&self) {
        self.fail_next_update.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self
            .profiles
            .read()
            .unwrap()
            .get(user_id.as_str())
            .cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        self.profiles
            .write()
            .unwrap()
            .insert(profile.user_id().as_str().to_string(), profile.clone());
        Ok(())
    }

    async fn update_total(&self, profile: &Profile) -> Result<(), DomainError> {
        if self.fail_next_update.swap(false, Ordering::SeqCst) {
            return Err(DomainError::database("injected profile write failure"));
        }
        self.profiles
            .write()
            .unwrap()
            .insert(profile.user_id().as_str().to_string(), profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[tokio::test]
    async fn session_repository_scopes_lookups_by_user() {
        let repo = InMemorySessionRepository::new();
        let session = ChatSession::start(test_user_id(), "Hello");
        repo.save(&session).await.unwrap();

        let other = UserId::new("user-999").unwrap();
        assert!(repo.find_for_user(session.id(), &other).await.unwrap().is_none());
        assert!(repo
            .find_for_user(session.id(), &test_user_id())
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn message_history_respects_the_limit() {
        let repo = InMemoryMessageRepository::new();
        let session_id = SessionId::new();
        for i in 0..5 {
            let msg =
                ChatMessage::from_user(session_id, test_user_id(), format!("msg {}", i), 1);
            repo.save(&msg).await.unwrap();
        }

        let history = repo.history(&session_id, 3).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].content(), "msg 0");
    }

    #[tokio::test]
    async fn ledger_sums_per_user() {
        let ledger = InMemoryPointLedger::new();
        let session_id = SessionId::new();
        let tx = PointTransaction::earned(test_user_id(), session_id, 5, "bonus");
        ledger.record(&tx).await.unwrap();
        let other = PointTransaction::earned(
            UserId::new("user-999").unwrap(),
            session_id,
            7,
            "other",
        );
        ledger.record(&other).await.unwrap();

        assert_eq!(ledger.sum_for_user(&test_user_id()).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn profile_update_failure_fires_once() {
        let repo = InMemoryProfileRepository::new();
        let profile = Profile::new(test_user_id());
        repo.save(&profile).await.unwrap();

        repo.fail_next_update();
        assert!(repo.update_total(&profile).await.is_err());
        assert!(repo.update_total(&profile).await.is_ok());
    }
}
