//! HTTP adapter: routes, handlers, DTOs, and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderName, middleware::from_fn_with_state, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::chat::{
    GetSessionMessagesHandler, ListSessionsHandler, SendMessageHandler,
};
use crate::application::handlers::points::{GetProfileHandler, ListTransactionsHandler};
use crate::ports::SessionValidator;

pub mod chat;
pub mod error;
pub mod middleware;
pub mod points;

pub use error::ApiError;

/// Shared application state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub send_message: Arc<SendMessageHandler>,
    pub list_sessions: Arc<ListSessionsHandler>,
    pub get_session_messages: Arc<GetSessionMessagesHandler>,
    pub get_profile: Arc<GetProfileHandler>,
    pub list_transactions: Arc<ListTransactionsHandler>,
}

/// Request timeout for all routes.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// Builds the application router.
///
/// All `/api` routes sit behind the auth middleware; `/health` does not.
pub fn router(state: AppState, validator: Arc<dyn SessionValidator>) -> Router {
    let api = Router::new()
        .nest("/chat", chat::router())
        .nest("/points", points::router())
        .layer(from_fn_with_state(validator, middleware::auth_middleware));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors_layer())
        .with_state(state)
}

/// Permissive CORS for browser clients.
///
/// Allowed headers match what the web frontend sends alongside its requests.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
