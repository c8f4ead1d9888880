//! cChat backend entry point.
//!
//! Wires configuration, the PostgreSQL pool, the OpenAI provider, and the
//! JWT validator into the HTTP server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cchat::adapters::ai::{OpenAiConfig, OpenAiProvider};
use cchat::adapters::auth::JwtSessionValidator;
use cchat::adapters::http::{self, AppState};
use cchat::adapters::postgres::{
    PostgresMessageRepository, PostgresPointLedger, PostgresProfileRepository,
    PostgresSessionRepository,
};
use cchat::application::handlers::chat::{
    GetSessionMessagesHandler, ListSessionsHandler, SendMessageHandler,
};
use cchat::application::handlers::points::{GetProfileHandler, ListTransactionsHandler};
use cchat::config::AppConfig;
use cchat::ports::SessionValidator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cchat=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        "Starting cchat backend"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    let sessions = Arc::new(PostgresSessionRepository::new(pool.clone()));
    let messages = Arc::new(PostgresMessageRepository::new(pool.clone()));
    let ledger = Arc::new(PostgresPointLedger::new(pool.clone()));
    let profiles = Arc::new(PostgresProfileRepository::new(pool.clone()));

    let ai_config = OpenAiConfig::new(config.ai.api_key())
        .with_model(&config.ai.model)
        .with_base_url(&config.ai.base_url)
        .with_timeout(config.ai.timeout())
        .with_default_max_tokens(config.ai.max_tokens)
        .with_default_temperature(config.ai.temperature);
    let ai = Arc::new(OpenAiProvider::new(ai_config)?);

    let validator: Arc<dyn SessionValidator> = Arc::new(JwtSessionValidator::new(
        config.auth.jwt_secret(),
        config.auth.audience.as_deref(),
    ));

    let state = AppState {
        send_message: Arc::new(SendMessageHandler::new(
            sessions.clone(),
            messages.clone(),
            ledger.clone(),
            profiles.clone(),
            ai,
        )),
        list_sessions: Arc::new(ListSessionsHandler::new(sessions.clone())),
        get_session_messages: Arc::new(GetSessionMessagesHandler::new(sessions, messages)),
        get_profile: Arc::new(GetProfileHandler::new(profiles)),
        list_transactions: Arc::new(ListTransactionsHandler::new(ledger)),
    };

    let app = http::router(state, validator);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
