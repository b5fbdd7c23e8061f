mod connection;
mod participant;
mod protocol;
mod room;
mod snapshot;

pub use connection::ConnectionId;
pub use participant::Participant;
pub use protocol::{ClientEvent, IceServerConfig, ServerEvent};
pub use room::{Room, RoomId};
pub use snapshot::{ParticipantSummary, RoomSnapshot};
