pub mod handlers;
pub mod types;

use crate::{Result, anthropic::HttpAnthropicClient, config::Config};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = HttpAnthropicClient::new(&config.anthropic)?;

    let app_state = handlers::AppState {
        client: Arc::new(client),
        config: Arc::new(config.anthropic),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
