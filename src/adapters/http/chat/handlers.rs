//! HTTP handlers for chat endpoints.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::application::handlers::chat::SendMessageCommand;
use crate::domain::foundation::SessionId;

use super::dto::{MessageView, SendMessageRequest, SendMessageResponse, SessionView};

/// POST /api/chat/message
///
/// Sends a message, creating a session if none was given, and returns the
/// assistant's reply with the point awards.
pub async fn send_message(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let session_id = request
        .session_id
        .as_deref()
        .map(SessionId::from_str)
        .transpose()
        .map_err(|_| {
            ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "Invalid session id")
        })?;

    let command = SendMessageCommand::new(request.message, session_id);
    let result = state.send_message.handle(&user, command).await?;

    Ok(Json(result.into()))
}

/// GET /api/chat/sessions
///
/// Lists the user's sessions, most recently updated first.
pub async fn list_sessions(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<SessionView>>, ApiError> {
    let sessions = state.list_sessions.handle(&user.id).await?;
    Ok(Json(sessions.iter().map(SessionView::from).collect()))
}

/// GET /api/chat/sessions/:session_id/messages
///
/// Returns one session's messages, oldest first. 404 when the session does
/// not exist or belongs to another user.
pub async fn get_session_messages(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<MessageView>>, ApiError> {
    let session_id = SessionId::from_str(&session_id).map_err(|_| {
        ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "Invalid session id")
    })?;

    let messages = state
        .get_session_messages
        .handle(&user.id, &session_id)
        .await?;

    Ok(Json(messages.iter().map(MessageView::from).collect()))
}
