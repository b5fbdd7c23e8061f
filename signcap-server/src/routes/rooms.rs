use crate::routes::AppState;
use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use signcap_core::{RoomId, RoomSnapshot};

#[derive(Serialize)]
pub struct RoomResponse {
    pub ok: bool,
    pub room: RoomSnapshot,
}

/// Public room snapshot. Unknown rooms answer with an empty participant
/// list, not a 404 — absence is not an error at this boundary.
pub async fn room_snapshot(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
) -> Json<RoomResponse> {
    Json(RoomResponse {
        ok: true,
        room: state.registry.public_snapshot(&RoomId::from(room_id)),
    })
}
