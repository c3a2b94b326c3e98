//! HTTP server for the monitor API
//!
//! Routes:
//! - `GET /api/processes` - process table snapshot
//! - `GET /api/usage` - system CPU/memory usage (blocks for the sampling window)
//! - `POST /api/terminate` - terminate a process by pid

pub mod api;
pub mod state;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use state::AppState;

/// Start the web server and run until Ctrl-C
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let state = AppState::new(&config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting process monitor on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/processes", get(api::list_processes))
        .route("/usage", get(api::get_usage))
        .route("/terminate", post(api::terminate_process));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
