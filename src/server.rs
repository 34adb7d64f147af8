//! Router construction and server startup.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Build HTTP router with routes and middleware
//! 3. Bind to the configured address and serve

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, handlers, services::AccountService, state::AppState};

/// Initialize logging with a tracing subscriber.
///
/// Reads the `RUST_LOG` environment variable and defaults to the "info" level.
/// Calling this more than once is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init();
}

/// Build the application router.
///
/// `/account` and `/customers` accept any method; only the body matters.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/account", any(handlers::accounts::new_account))
        .route("/customers", any(handlers::accounts::make_transaction))
        .route(
            "/customers/{customer_id}/account",
            post(handlers::accounts::new_customer_account),
        )
        .route(
            "/customers/{customer_id}/account/{account_id}",
            post(handlers::accounts::make_customer_transaction),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the account API with the given service until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(config: Config, account_service: Arc<dyn AccountService>) -> anyhow::Result<()> {
    let app = router(AppState::new(account_service));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
