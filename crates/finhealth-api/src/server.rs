//! Server configuration and startup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // API v1
        .nest("/api/v1", api_v1_routes())
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes.
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/assess", post(routes::assess::assess))
        .route("/assess/batch", post(routes::assess::assess_batch))
        .route("/locales", get(routes::locales::list))
}

/// Run the server until Ctrl-C.
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Finhealth API Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/v1/locales");
    tracing::info!("  POST /api/v1/assess");
    tracing::info!("  POST /api/v1/assess/batch");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
