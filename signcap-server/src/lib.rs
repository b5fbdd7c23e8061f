pub mod config;
pub mod error;
pub mod room;
pub mod routes;
pub mod session;
pub mod signaling;

pub use config::ServerConfig;
pub use error::ApiError;
pub use room::{PresenceTracker, RoomRegistry};
pub use routes::AppState;
pub use session::SessionCoordinator;
pub use signaling::{ConnectionTable, EventSink, SignalingRelay};
