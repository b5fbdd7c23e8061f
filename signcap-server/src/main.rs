use anyhow::Context;
use signcap_server::ServerConfig;
use signcap_server::routes::{AppState, build_router};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = AppState::new(config);
    let app = build_router(state.clone())?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("signcap backend listening on http://{addr}");
    if state.config.allowed_origins.is_empty() {
        info!("CORS allowed: any origin (dev default)");
    } else {
        info!("CORS allowed: {}", state.config.allowed_origins.join(", "));
    }

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
