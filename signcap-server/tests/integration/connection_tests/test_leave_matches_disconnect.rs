use signcap_core::{ConnectionId, RoomId, ServerEvent};

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::{join, leave};

/// End state after Bo departs room r1, however the departure happened:
/// (room count, remaining participant names, events Ana observed).
async fn depart_via(disconnect: bool) -> (usize, Vec<String>, Vec<ServerEvent>) {
    let (coordinator, registry, sink) = create_test_coordinator();
    let ana = ConnectionId::new();
    let bo = ConnectionId::new();

    coordinator.handle_event(ana, join("r1", "Ana", "")).await;
    coordinator.handle_event(bo, join("r1", "Bo", "")).await;
    sink.clear().await;

    if disconnect {
        coordinator.handle_disconnect(bo).await;
    } else {
        coordinator.handle_event(bo, leave("r1")).await;
    }

    let snapshot = registry.public_snapshot(&RoomId::from("r1"));
    let names = snapshot
        .participants
        .iter()
        .map(|p| p.name.clone())
        .collect();

    (registry.room_count(), names, sink.events_for(ana).await)
}

#[tokio::test]
async fn test_leave_and_disconnect_produce_identical_end_state() {
    init_tracing();

    let via_leave = depart_via(false).await;
    let via_disconnect = depart_via(true).await;

    assert_eq!(via_leave, via_disconnect);
    assert_eq!(
        via_leave.2,
        vec![ServerEvent::PresenceLeave {
            name: Some("Bo".to_string())
        }]
    );
}
