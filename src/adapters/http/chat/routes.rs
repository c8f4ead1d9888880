//! Chat route definitions.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers;

/// Builds the chat router, nested under `/api/chat`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/message", post(handlers::send_message))
        .route("/sessions", get(handlers::list_sessions))
        .route(
            "/sessions/:session_id/messages",
            get(handlers::get_session_messages),
        )
}
