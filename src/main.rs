//! Exercise Tracker - Binary Entry Point

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exercise_tracker::{create_router, AppState, Config, ExerciseTracker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env may set RUST_LOG, so load it before the subscriber
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exercise_tracker=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    let config = Config::parse();

    tracing::info!(
        "{} v{} starting",
        exercise_tracker::NAME,
        exercise_tracker::VERSION
    );
    tracing::info!(
        public_dir = %config.public_dir.display(),
        views_dir = %config.views_dir.display(),
        "Configuration loaded"
    );

    let tracker = Arc::new(ExerciseTracker::new());
    let state = Arc::new(AppState::new(tracker));
    let app = create_router(state, &config.assets());

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
