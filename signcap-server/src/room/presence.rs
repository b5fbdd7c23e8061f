use crate::room::RoomRegistry;
use signcap_core::{Participant, RoomId, ServerEvent};
use std::sync::Arc;

/// Builds the presence events broadcast on join/leave and the `room:state`
/// snapshot handed to a newly-joined participant. Delivery is the caller's
/// concern.
#[derive(Clone)]
pub struct PresenceTracker {
    registry: Arc<RoomRegistry>,
}

impl PresenceTracker {
    pub fn new(registry: Arc<RoomRegistry>) -> Self {
        Self { registry }
    }

    pub fn announce_join(&self, participant: &Participant) -> ServerEvent {
        ServerEvent::PresenceJoin {
            name: participant.name.clone(),
            email: participant.email.clone(),
        }
    }

    /// `None` when the departing connection had no recorded entry; the event
    /// then carries no name rather than failing.
    pub fn announce_leave(&self, name: Option<String>) -> ServerEvent {
        ServerEvent::PresenceLeave { name }
    }

    pub fn snapshot(&self, room_id: &RoomId) -> ServerEvent {
        ServerEvent::RoomState(self.registry.public_snapshot(room_id))
    }
}
