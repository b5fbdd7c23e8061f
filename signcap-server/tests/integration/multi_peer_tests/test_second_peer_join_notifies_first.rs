use signcap_core::{ConnectionId, ServerEvent};

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::join;

#[tokio::test]
async fn test_second_peer_join_notifies_first() {
    init_tracing();

    let (coordinator, _registry, sink) = create_test_coordinator();
    let ana = ConnectionId::new();
    let bo = ConnectionId::new();

    coordinator.handle_event(ana, join("r1", "Ana", "")).await;
    sink.clear().await;

    coordinator.handle_event(bo, join("r1", "Bo", "")).await;

    // Ana hears about Bo...
    assert_eq!(
        sink.events_for(ana).await,
        vec![ServerEvent::PresenceJoin {
            name: "Bo".to_string(),
            email: String::new(),
        }]
    );

    // ...and Bo receives the room state with both of them, in join order.
    match sink.events_for(bo).await.as_slice() {
        [ServerEvent::RoomState(snapshot)] => {
            let names: Vec<_> = snapshot
                .participants
                .iter()
                .map(|p| p.name.as_str())
                .collect();
            assert_eq!(names, ["Ana", "Bo"]);
        }
        other => panic!("expected one room:state, got {other:?}"),
    }
}
