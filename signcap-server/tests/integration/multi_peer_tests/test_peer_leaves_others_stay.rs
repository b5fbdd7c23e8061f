use signcap_core::{ConnectionId, RoomId, ServerEvent};

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::{join, leave};

#[tokio::test]
async fn test_peer_leaves_others_stay() {
    init_tracing();

    let (coordinator, registry, sink) = create_test_coordinator();
    let ana = ConnectionId::new();
    let bo = ConnectionId::new();
    let cy = ConnectionId::new();

    for (conn, name) in [(ana, "Ana"), (bo, "Bo"), (cy, "Cy")] {
        coordinator.handle_event(conn, join("r1", name, "")).await;
    }
    sink.clear().await;

    coordinator.handle_event(cy, leave("r1")).await;

    let snapshot = registry.public_snapshot(&RoomId::from("r1"));
    let names: Vec<_> = snapshot.participants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Bo"]);

    let departure = ServerEvent::PresenceLeave {
        name: Some("Cy".to_string()),
    };
    assert_eq!(sink.events_for(ana).await, vec![departure.clone()]);
    assert_eq!(sink.events_for(bo).await, vec![departure]);
    assert!(sink.events_for(cy).await.is_empty());
}
