use async_trait::async_trait;
use signcap_core::{ConnectionId, ServerEvent};
use signcap_server::EventSink;
use tokio::sync::Mutex;

/// EventSink that records every delivery for verification.
pub struct MockEventSink {
    events: Mutex<Vec<(ConnectionId, ServerEvent)>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// All recorded deliveries in order.
    pub async fn all(&self) -> Vec<(ConnectionId, ServerEvent)> {
        self.events.lock().await.clone()
    }

    /// Events delivered to one connection, in order.
    pub async fn events_for(&self, conn_id: ConnectionId) -> Vec<ServerEvent> {
        self.events
            .lock()
            .await
            .iter()
            .filter(|(target, _)| *target == conn_id)
            .map(|(_, event)| event.clone())
            .collect()
    }

    /// Forget everything recorded so far; lets a test focus on the events of
    /// one step.
    pub async fn clear(&self) {
        self.events.lock().await.clear();
    }
}

impl Default for MockEventSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSink for MockEventSink {
    async fn deliver(&self, target: ConnectionId, event: ServerEvent) {
        self.events.lock().await.push((target, event));
    }
}
