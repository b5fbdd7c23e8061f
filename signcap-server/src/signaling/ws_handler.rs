use crate::routes::AppState;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use signcap_core::{ClientEvent, ConnectionId};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Signaling endpoint. Each upgraded socket gets a freshly minted connection
/// identity; there is no resume — a reconnecting client is a new participant.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let conn_id = ConnectionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, conn_id, state))
}

async fn handle_socket(socket: WebSocket, conn_id: ConnectionId, state: AppState) {
    info!("New WebSocket connection: {conn_id}");

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.connections.insert(conn_id, tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let coordinator = state.coordinator.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => coordinator.handle_event(conn_id, event).await,
                        // Best-effort protocol: malformed input is dropped,
                        // never answered with an error.
                        Err(e) => debug!("Dropping malformed message from {conn_id}: {e}"),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Cleanup runs on every exit path; disconnect and explicit leave share
    // the same registry primitive underneath.
    state.coordinator.handle_disconnect(conn_id).await;
    state.connections.remove(&conn_id);

    info!("WebSocket disconnected: {conn_id}");
}
