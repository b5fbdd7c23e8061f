use crate::routes::AppState;
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use signcap_core::IceServerConfig;

#[derive(Serialize)]
pub struct WebRtcConfigResponse {
    pub webrtc: WebRtcSection,
}

#[derive(Serialize)]
pub struct WebRtcSection {
    #[serde(rename = "iceServers")]
    pub ice_servers: Vec<IceServerConfig>,
}

/// ICE servers handed to browser clients before they open a peer connection.
pub async fn webrtc_config(State(state): State<AppState>) -> Json<WebRtcConfigResponse> {
    Json(WebRtcConfigResponse {
        webrtc: WebRtcSection {
            ice_servers: state.config.ice_servers.clone(),
        },
    })
}
