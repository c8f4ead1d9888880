//! ChatMessage entity and message roles.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, SessionId, Timestamp, UserId};

/// Role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// A message typed by the user.
    User,
    /// A model-generated reply.
    Assistant,
}

impl MessageRole {
    /// Wire representation used in persistence and the completion API.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single message within a session. Immutable once written.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    id: MessageId,
    session_id: SessionId,
    user_id: UserId,
    role: MessageRole,
    content: String,
    points_awarded: Option<i32>,
    created_at: Timestamp,
}

impl ChatMessage {
    /// Creates a user-authored message with its fixed point award.
    pub fn from_user(
        session_id: SessionId,
        user_id: UserId,
        content: impl Into<String>,
        points_awarded: i32,
    ) -> Self {
        Self {
            id: MessageId::new(),
            session_id,
            user_id,
            role: MessageRole::User,
            content: content.into(),
            points_awarded: Some(points_awarded),
            created_at: Timestamp::now(),
        }
    }

    /// Creates an assistant reply. Assistant messages never carry an award.
    pub fn from_assistant(
        session_id: SessionId,
        user_id: UserId,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            session_id,
            user_id,
            role: MessageRole::Assistant,
            content: content.into(),
            points_awarded: None,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a message from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MessageId,
        session_id: SessionId,
        user_id: UserId,
        role: MessageRole,
        content: String,
        points_awarded: Option<i32>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            user_id,
            role,
            content,
            points_awarded,
            created_at,
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn points_awarded(&self) -> Option<i32> {
        self.points_awarded
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ids() -> (SessionId, UserId) {
        (SessionId::new(), UserId::new("user-123").unwrap())
    }

    #[test]
    fn from_user_carries_the_award() {
        let (session_id, user_id) = test_ids();
        let msg = ChatMessage::from_user(session_id, user_id, "Hello", 1);

        assert_eq!(msg.role(), MessageRole::User);
        assert_eq!(msg.points_awarded(), Some(1));
        assert_eq!(msg.content(), "Hello");
    }

    #[test]
    fn from_assistant_never_carries_an_award() {
        let (session_id, user_id) = test_ids();
        let msg = ChatMessage::from_assistant(session_id, user_id, "Hi!");

        assert_eq!(msg.role(), MessageRole::Assistant);
        assert_eq!(msg.points_awarded(), None);
    }

    #[test]
    fn role_wire_representation() {
        assert_eq!(MessageRole::User.as_str(), "user");
        assert_eq!(MessageRole::Assistant.as_str(), "assistant");
    }
}
