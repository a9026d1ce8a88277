//! Server startup and shutdown.
//!
//! `run_server` connects the database pool, applies migrations, builds the
//! shared state and router, and serves HTTP with graceful shutdown.

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use crate::state;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or listener
/// binding fail, or if the server encounters a runtime error.
pub async fn run_server(config: Config, addr: String, should_migrate: bool) -> AppResult<()> {
    info!("Starting shortly server...");

    // Initialize database connection pool
    info!("Connecting to database...");
    let repository =
        crate::db::Repository::new(&config.database.url, config.database.max_connections).await?;

    // Schema initialization is an explicit bootstrap step, decoupled from
    // request handling
    if should_migrate {
        info!("Running database migrations...");
        repository.run_migrations().await?;
        info!("Migrations completed successfully");
    }

    let state = Arc::new(state::AppState {
        repository,
        base_url: config.url.base_url.clone(),
        short_code_length: config.url.short_code_length,
        short_code_max_attempts: config.url.short_code_max_attempts,
    });

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);
    info!("Base URL: {}", config.url.base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails, in which case the OS cannot
/// deliver shutdown signals and graceful shutdown is impossible.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
