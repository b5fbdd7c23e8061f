use signcap_core::{ConnectionId, Participant, Room, RoomId, RoomSnapshot};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

/// In-memory room store. Owns every `Room`; nothing else holds room state.
///
/// All mutations run as one critical section behind a single mutex, so the
/// no-empty-room invariant holds under any interleaving of joins, leaves and
/// disconnects. Nothing awaits while the lock is held.
pub struct RoomRegistry {
    rooms: Mutex<HashMap<RoomId, Room>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    fn rooms(&self) -> MutexGuard<'_, HashMap<RoomId, Room>> {
        self.rooms.lock().expect("room registry mutex poisoned")
    }

    /// Inserts (or replaces) the participant entry for `conn_id`, creating
    /// the room if it does not exist yet. Never fails.
    pub fn insert_participant(
        &self,
        room_id: &RoomId,
        conn_id: ConnectionId,
        participant: Participant,
    ) {
        let mut rooms = self.rooms();
        if !rooms.contains_key(room_id) {
            info!("Creating new room: {room_id}");
        }
        rooms
            .entry(room_id.clone())
            .or_default()
            .insert(conn_id, participant);
        debug_assert_no_empty_rooms(&rooms);
    }

    /// Removes the participant entry for `conn_id` from one room, deleting
    /// the room if it became empty. `None` for unknown rooms or connections.
    pub fn remove_participant(
        &self,
        room_id: &RoomId,
        conn_id: &ConnectionId,
    ) -> Option<Participant> {
        let mut rooms = self.rooms();
        let room = rooms.get_mut(room_id)?;
        let removed = room.remove(conn_id);
        if room.is_empty() {
            rooms.remove(room_id);
            info!("Destroying empty room: {room_id}");
        }
        debug_assert_no_empty_rooms(&rooms);
        removed
    }

    /// Removes `conn_id` from every room it belongs to and deletes rooms left
    /// empty. Returns the (room, participant name) pairs the connection was
    /// removed from.
    ///
    /// This is the single cleanup primitive behind both explicit leave-all
    /// and transport disconnect, so the two paths cannot diverge.
    pub fn remove_connection_everywhere(&self, conn_id: &ConnectionId) -> Vec<(RoomId, String)> {
        let mut rooms = self.rooms();
        let mut departed = Vec::new();
        rooms.retain(|room_id, room| {
            if let Some(participant) = room.remove(conn_id) {
                departed.push((room_id.clone(), participant.name));
            }
            !room.is_empty()
        });
        debug_assert_no_empty_rooms(&rooms);
        departed
    }

    /// Connections currently subscribed to the room, in join order. Empty for
    /// unknown rooms.
    pub fn occupants(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        self.rooms()
            .get(room_id)
            .map(|room| room.connections().copied().collect())
            .unwrap_or_default()
    }

    /// Read-only public view of a room. Unknown rooms yield an empty
    /// participant list with the identifier echoed back, never an error.
    pub fn public_snapshot(&self, room_id: &RoomId) -> RoomSnapshot {
        match self.rooms().get(room_id) {
            Some(room) => RoomSnapshot::of(room_id.clone(), room),
            None => RoomSnapshot::empty(room_id.clone()),
        }
    }

    pub fn contains_room(&self, room_id: &RoomId) -> bool {
        self.rooms().contains_key(room_id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms().len()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn debug_assert_no_empty_rooms(rooms: &HashMap<RoomId, Room>) {
    debug_assert!(
        rooms.values().all(|room| !room.is_empty()),
        "empty room left in registry"
    );
}
