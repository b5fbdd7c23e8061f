mod config;
mod health;
mod invitations;
mod predictions;
mod rooms;

use crate::config::ServerConfig;
use crate::room::RoomRegistry;
use crate::session::SessionCoordinator;
use crate::signaling::{ConnectionTable, EventSink};
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub registry: Arc<RoomRegistry>,
    pub connections: Arc<ConnectionTable>,
    pub coordinator: SessionCoordinator,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let registry = Arc::new(RoomRegistry::new());
        let connections = Arc::new(ConnectionTable::new());
        let coordinator =
            SessionCoordinator::new(registry.clone(), connections.clone() as Arc<dyn EventSink>);

        Self {
            config: Arc::new(config),
            registry,
            connections,
            coordinator,
            http: reqwest::Client::new(),
        }
    }
}

/// Assemble the full application: the `/rtc` signaling endpoint, the `/api`
/// routes, request tracing and CORS.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config)?;

    Ok(Router::new()
        .route("/rtc", get(crate::signaling::ws_handler))
        .nest("/api", api_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/config", get(config::webrtc_config))
        .route("/rooms/{room_id}", get(rooms::room_snapshot))
        .route("/invitations", post(invitations::create_invitation))
        .route("/predictions/predict", post(predictions::predict))
        .route("/predictions/health", get(predictions::prediction_health))
}

fn cors_layer(config: &ServerConfig) -> anyhow::Result<CorsLayer> {
    // No configured origins means any origin is allowed (dev default).
    if config.allowed_origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
