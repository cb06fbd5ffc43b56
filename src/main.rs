use std::sync::Arc;

use anyhow::Context;
use mentor_backend::{config::AppConfig, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,mentor_backend=debug".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; /api/chat will answer 500 until it is configured");
    }

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config)?);

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("mentor chat backend listening on http://{bind_addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
