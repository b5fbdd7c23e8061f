use crate::signaling::EventSink;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use signcap_core::{ConnectionId, ServerEvent};
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Live connections and their outbound channels. The WebSocket handler
/// registers a connection on upgrade and removes it after disconnect
/// cleanup has run.
pub struct ConnectionTable {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

impl ConnectionTable {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    pub fn insert(&self, conn_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.connections.insert(conn_id, tx);
    }

    pub fn remove(&self, conn_id: &ConnectionId) {
        self.connections.remove(conn_id);
    }

    pub fn send_event(&self, conn_id: ConnectionId, event: &ServerEvent) {
        let Some(tx) = self.connections.get(&conn_id) else {
            // The target can legitimately vanish between audience lookup and
            // delivery; best-effort relay drops the event.
            warn!("Attempted to deliver to disconnected connection {conn_id}");
            return;
        };

        match serde_json::to_string(event) {
            Ok(json) => {
                if tx.send(Message::Text(json.into())).is_err() {
                    warn!("Outbound channel closed for {conn_id}");
                }
            }
            Err(e) => error!("Failed to serialize server event: {e}"),
        }
    }
}

impl Default for ConnectionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSink for ConnectionTable {
    async fn deliver(&self, target: ConnectionId, event: ServerEvent) {
        self.send_event(target, &event);
    }
}
