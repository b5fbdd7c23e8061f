use async_trait::async_trait;
use signcap_core::{ConnectionId, ServerEvent};

/// Delivery side of the transport: the coordinator and relay push server
/// events through this seam without knowing what carries them. Implemented
/// by the WebSocket connection table in production and by a recording mock
/// in tests.
///
/// Delivery is fire-and-forget; implementations must not fail the caller.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn deliver(&self, target: ConnectionId, event: ServerEvent);
}
