use crate::room::RoomRegistry;
use crate::signaling::EventSink;
use chrono::{SecondsFormat, Utc};
use signcap_core::{ClientEvent, ConnectionId, RoomId, ServerEvent};
use std::sync::Arc;
use tracing::debug;

/// Stateless routing of signaling, chat, typing and caption traffic.
///
/// The room identifier is taken from the message body; the sender's own
/// membership is not verified. Unknown rooms resolve to an empty audience,
/// so misaddressed traffic goes nowhere without raising an error.
#[derive(Clone)]
pub struct SignalingRelay {
    registry: Arc<RoomRegistry>,
    sink: Arc<dyn EventSink>,
}

impl SignalingRelay {
    pub fn new(registry: Arc<RoomRegistry>, sink: Arc<dyn EventSink>) -> Self {
        Self { registry, sink }
    }

    /// Fans an event out to the room's occupants. The audience is collected
    /// before any delivery so the registry lock is never held across sends.
    pub async fn broadcast(
        &self,
        room_id: &RoomId,
        exclude: Option<ConnectionId>,
        event: ServerEvent,
    ) {
        let targets = self.registry.occupants(room_id);
        for conn_id in targets {
            if Some(conn_id) == exclude {
                continue;
            }
            self.sink.deliver(conn_id, event.clone()).await;
        }
    }

    pub async fn relay(&self, sender: ConnectionId, event: ClientEvent) {
        match event {
            ClientEvent::Offer {
                room_id,
                offer,
                from,
            } => {
                self.broadcast(&room_id, Some(sender), ServerEvent::Offer { offer, from })
                    .await;
            }
            ClientEvent::Answer {
                room_id,
                answer,
                from,
            } => {
                self.broadcast(&room_id, Some(sender), ServerEvent::Answer { answer, from })
                    .await;
            }
            ClientEvent::Ice {
                room_id,
                candidate,
                from,
            } => {
                self.broadcast(&room_id, Some(sender), ServerEvent::Ice { candidate, from })
                    .await;
            }
            ClientEvent::Chat {
                room_id,
                text,
                sender: display_name,
            } => {
                if text.is_empty() {
                    debug!("Dropping chat message without text from {sender}");
                    return;
                }
                let event = ServerEvent::Chat {
                    text,
                    sender: display_name,
                    // Relay time is authoritative; clients never supply it.
                    time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                };
                // Chat is a full-room broadcast, sender included.
                self.broadcast(&room_id, None, event).await;
            }
            ClientEvent::Caption {
                room_id,
                text,
                lang,
            } => {
                self.broadcast(&room_id, Some(sender), ServerEvent::Caption { text, lang })
                    .await;
            }
            ClientEvent::Typing {
                room_id,
                sender: display_name,
                typing,
            } => {
                self.broadcast(
                    &room_id,
                    Some(sender),
                    ServerEvent::Typing {
                        sender: display_name,
                        typing,
                    },
                )
                .await;
            }
            // Lifecycle events are routed by the coordinator and never reach
            // the relay.
            ClientEvent::Join { .. } | ClientEvent::Leave { .. } => {}
        }
    }
}
