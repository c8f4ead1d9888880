//! Points route definitions.

use axum::{routing::get, Router};

use crate::adapters::http::AppState;

use super::handlers;

/// Builds the points router, nested under `/api/points`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::get_profile))
        .route("/transactions", get(handlers::list_transactions))
}
