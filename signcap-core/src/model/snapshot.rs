use crate::model::participant::Participant;
use crate::model::room::{Room, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public projection of one participant: presence metadata only, no
/// connection identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub name: String,
    pub email: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub joined_at: DateTime<Utc>,
}

impl From<&Participant> for ParticipantSummary {
    fn from(p: &Participant) -> Self {
        Self {
            name: p.name.clone(),
            email: p.email.clone(),
            joined_at: p.joined_at,
        }
    }
}

/// Point-in-time read-only view of a room, in join order. Unknown rooms are
/// represented as an empty participant list with the identifier echoed back,
/// never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub participants: Vec<ParticipantSummary>,
}

impl RoomSnapshot {
    pub fn empty(room_id: RoomId) -> Self {
        Self {
            room_id,
            participants: Vec::new(),
        }
    }

    pub fn of(room_id: RoomId, room: &Room) -> Self {
        Self {
            room_id,
            participants: room.participants().map(ParticipantSummary::from).collect(),
        }
    }
}
