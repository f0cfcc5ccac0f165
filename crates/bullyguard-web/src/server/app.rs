use crate::server::routes;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// Build the Axum application
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::classify))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(state);

    tracing::info!("Starting BullyGuard server on {}", addr);
    tracing::info!("Open http://{} in your browser", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
