//! HTTP DTOs for chat endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::chat::SendMessageResult;
use crate::domain::chat::{ChatMessage, ChatSession, MessageRole};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for POST /api/chat/message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// The message content.
    pub message: String,
    /// Session to continue; omit to start a new conversation.
    #[serde(default)]
    pub session_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for POST /api/chat/message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    /// The assistant's reply.
    pub message: String,
    /// The session the exchange belongs to.
    pub session_id: String,
    /// Points earned by this exchange.
    pub points_earned: i32,
    /// The user's point total after the exchange.
    pub total_points: i64,
}

impl From<SendMessageResult> for SendMessageResponse {
    fn from(result: SendMessageResult) -> Self {
        Self {
            message: result.reply,
            session_id: result.session_id.to_string(),
            points_earned: result.points_earned,
            total_points: result.total_points,
        }
    }
}

/// View of a session for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: String,
    pub title: String,
    pub message_count: i32,
    pub points_earned: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ChatSession> for SessionView {
    fn from(session: &ChatSession) -> Self {
        Self {
            id: session.id().to_string(),
            title: session.title().to_string(),
            message_count: session.message_count(),
            points_earned: session.points_earned(),
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

/// View of a message for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<i32>,
    pub created_at: String,
}

impl From<&ChatMessage> for MessageView {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role(),
            content: message.content().to_string(),
            points_awarded: message.points_awarded(),
            created_at: message.created_at().to_rfc3339(),
        }
    }
}
