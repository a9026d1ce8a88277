use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::health;
use super::AppState;

/// Create application router.
///
/// Fixed paths take precedence over the `{code}` capture, so `/shorten`
/// and `/_health` are never shadowed by the redirect route.
pub fn create_router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/", get(handlers::homepage))
        .route("/shorten", post(handlers::shorten_url))
        .route("/_health", get(health::health_check))
        .route("/{code}", get(handlers::redirect_to_url))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
