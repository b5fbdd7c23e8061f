use crate::routes::AppState;
use axum::Json;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub rooms: usize,
    pub time: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: "signcap-server",
        rooms: state.registry.room_count(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
