mod account;
mod health;
mod swagger;

use health::{health_checker_handler, index_handler};
use tower_http::trace::TraceLayer;

use crate::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;

/// Builds the application router over an already-constructed state. The
/// database gateway is handed in explicitly rather than reached through
/// process-wide globals.
pub fn make_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_checker_handler))
        .nest("/api/v1/accounts", account::account_routes())
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
