use crate::model::connection::ConnectionId;
use crate::model::participant::Participant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Room identifier. Externally supplied and opaque; validated flows constrain
/// it to 3-64 characters but the coordinator tolerates any non-empty string.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One room's participant entries, keyed by connection id.
///
/// Entries keep insertion order so snapshots list participants in join order
/// deterministically. Re-inserting an existing key replaces the entry in
/// place without moving it.
#[derive(Debug, Default)]
pub struct Room {
    entries: Vec<(ConnectionId, Participant)>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, conn_id: ConnectionId, participant: Participant) {
        match self.entries.iter_mut().find(|(id, _)| *id == conn_id) {
            Some((_, existing)) => *existing = participant,
            None => self.entries.push((conn_id, participant)),
        }
    }

    pub fn remove(&mut self, conn_id: &ConnectionId) -> Option<Participant> {
        let idx = self.entries.iter().position(|(id, _)| id == conn_id)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains(&self, conn_id: &ConnectionId) -> bool {
        self.entries.iter().any(|(id, _)| id == conn_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn connections(&self) -> impl Iterator<Item = &ConnectionId> {
        self.entries.iter().map(|(id, _)| id)
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.entries.iter().map(|(_, p)| p)
    }
}
