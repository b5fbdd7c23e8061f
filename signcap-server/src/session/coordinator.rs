use crate::room::{PresenceTracker, RoomRegistry};
use crate::signaling::{EventSink, SignalingRelay};
use signcap_core::{ClientEvent, ConnectionId, Participant, RoomId};
use std::sync::Arc;
use tracing::{debug, info};

/// Binds transport connections to rooms: processes `join`/`leave`, routes
/// everything else through the relay, and cleans up on disconnect.
#[derive(Clone)]
pub struct SessionCoordinator {
    registry: Arc<RoomRegistry>,
    presence: PresenceTracker,
    relay: SignalingRelay,
    sink: Arc<dyn EventSink>,
}

impl SessionCoordinator {
    pub fn new(registry: Arc<RoomRegistry>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            presence: PresenceTracker::new(registry.clone()),
            relay: SignalingRelay::new(registry.clone(), sink.clone()),
            registry,
            sink,
        }
    }

    pub async fn handle_event(&self, conn_id: ConnectionId, event: ClientEvent) {
        match event {
            ClientEvent::Join {
                room_id,
                name,
                email,
            } => self.join(conn_id, room_id, name, email).await,
            ClientEvent::Leave { room_id } => self.leave(conn_id, room_id).await,
            other => self.relay.relay(conn_id, other).await,
        }
    }

    async fn join(&self, conn_id: ConnectionId, room_id: RoomId, name: String, email: String) {
        if room_id.is_empty() {
            debug!("Ignoring join without a room id from {conn_id}");
            return;
        }

        let participant = Participant::new(name, email);
        let announce = self.presence.announce_join(&participant);

        info!("{} joins room '{room_id}' as {conn_id}", participant.name);
        self.registry
            .insert_participant(&room_id, conn_id, participant);

        // Occupants hear about the newcomer; only the newcomer gets the
        // full room state.
        self.relay.broadcast(&room_id, Some(conn_id), announce).await;
        self.sink
            .deliver(conn_id, self.presence.snapshot(&room_id))
            .await;
    }

    async fn leave(&self, conn_id: ConnectionId, room_id: RoomId) {
        if room_id.is_empty() {
            debug!("Ignoring leave without a room id from {conn_id}");
            return;
        }

        let removed = self.registry.remove_participant(&room_id, &conn_id);
        let departure = self.presence.announce_leave(removed.map(|p| p.name));

        // An unknown room resolves to an empty audience; nothing is sent.
        self.relay
            .broadcast(&room_id, Some(conn_id), departure)
            .await;
    }

    /// Transport-initiated teardown. Produces the same registry end-state as
    /// an explicit `leave` for every joined room.
    pub async fn handle_disconnect(&self, conn_id: ConnectionId) {
        let departures = self.registry.remove_connection_everywhere(&conn_id);

        for (room_id, name) in departures {
            info!("{name} left room '{room_id}' (disconnect)");
            let departure = self.presence.announce_leave(Some(name));
            self.relay
                .broadcast(&room_id, Some(conn_id), departure)
                .await;
        }
    }
}
