//! ChatSession aggregate.
//!
//! A session is one continuous conversation thread owned by a user. It is
//! created on the first message of a conversation and carries running
//! message-count and points-earned totals that are refreshed after every
//! exchange.

use crate::domain::foundation::{SessionId, Timestamp, UserId};

/// Number of characters of the first message used for the session title.
const TITLE_PREFIX_CHARS: usize = 50;

/// A chat session aggregate.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: SessionId,
    user_id: UserId,
    title: String,
    message_count: i32,
    points_earned: i32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ChatSession {
    /// Starts a new session for a user, deriving the title from the first
    /// message (first 50 characters plus an ellipsis).
    pub fn start(user_id: UserId, first_message: &str) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            user_id,
            title: derive_title(first_message),
            message_count: 0,
            points_earned: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a session from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        user_id: UserId,
        title: String,
        message_count: i32,
        points_earned: i32,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            message_count,
            points_earned,
            created_at,
            updated_at,
        }
    }

    /// Records a completed exchange: refreshes the running message count and
    /// adds the points awarded this turn.
    pub fn record_exchange(&mut self, message_count: i32, points_awarded: i32) {
        self.message_count = message_count;
        self.points_earned += points_awarded;
        self.updated_at = Timestamp::now();
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message_count(&self) -> i32 {
        self.message_count
    }

    pub fn points_earned(&self) -> i32 {
        self.points_earned
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

/// Derives a session title from the first message.
///
/// Truncation is by characters, not bytes, so multi-byte content cannot
/// split a code point.
fn derive_title(first_message: &str) -> String {
    let prefix: String = first_message.chars().take(TITLE_PREFIX_CHARS).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[test]
    fn start_derives_title_from_first_message() {
        let session = ChatSession::start(test_user_id(), "Hello there");
        assert_eq!(session.title(), "Hello there...");
    }

    #[test]
    fn start_truncates_long_titles_to_fifty_chars() {
        let message = "x".repeat(80);
        let session = ChatSession::start(test_user_id(), &message);
        assert_eq!(session.title().chars().count(), 53);
        assert!(session.title().ends_with("..."));
    }

    #[test]
    fn start_truncates_on_char_boundaries() {
        let message = "é".repeat(60);
        let session = ChatSession::start(test_user_id(), &message);
        assert_eq!(session.title(), format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn start_begins_with_zero_counts() {
        let session = ChatSession::start(test_user_id(), "Hello");
        assert_eq!(session.message_count(), 0);
        assert_eq!(session.points_earned(), 0);
    }

    #[test]
    fn record_exchange_replaces_count_and_accumulates_points() {
        let mut session = ChatSession::start(test_user_id(), "Hello");
        session.record_exchange(2, 1);
        session.record_exchange(4, 3);

        assert_eq!(session.message_count(), 4);
        assert_eq!(session.points_earned(), 4);
    }
}
