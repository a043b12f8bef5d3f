//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::rest::{exercises, logs, users};
use super::state::AppState;
use crate::config::StaticAssets;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>, assets: &StaticAssets) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route("/api/users/:id/exercises", post(exercises::log_exercise))
        .route("/api/users/:id/logs", get(logs::get_log))
        // Landing page and static assets
        .route_service("/", ServeFile::new(assets.index_page()))
        .fallback_service(ServeDir::new(&assets.public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
