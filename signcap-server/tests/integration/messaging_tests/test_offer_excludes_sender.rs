use serde_json::json;
use signcap_core::{ConnectionId, ServerEvent};

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::{ice, join, offer};

#[tokio::test]
async fn test_offer_excludes_sender() {
    init_tracing();

    let (coordinator, _registry, sink) = create_test_coordinator();
    let ana = ConnectionId::new();
    let bo = ConnectionId::new();
    let cy = ConnectionId::new();

    for (conn, name) in [(ana, "Ana"), (bo, "Bo"), (cy, "Cy")] {
        coordinator.handle_event(conn, join("r1", name, "")).await;
    }
    sink.clear().await;

    coordinator
        .handle_event(ana, offer("r1", "v=0", Some("ana")))
        .await;

    let expected = ServerEvent::Offer {
        offer: json!({ "type": "offer", "sdp": "v=0" }),
        from: Some("ana".to_string()),
    };
    assert_eq!(sink.events_for(bo).await, vec![expected.clone()]);
    assert_eq!(sink.events_for(cy).await, vec![expected]);
    assert!(sink.events_for(ana).await.is_empty());
}

#[tokio::test]
async fn test_ice_candidate_excludes_sender() {
    init_tracing();

    let (coordinator, _registry, sink) = create_test_coordinator();
    let ana = ConnectionId::new();
    let bo = ConnectionId::new();

    coordinator.handle_event(ana, join("r1", "Ana", "")).await;
    coordinator.handle_event(bo, join("r1", "Bo", "")).await;
    sink.clear().await;

    coordinator
        .handle_event(bo, ice("r1", "candidate:0 1 UDP 1 10.0.0.1 9 typ host", None))
        .await;

    let bo_events = sink.events_for(bo).await;
    assert!(bo_events.is_empty());

    match sink.events_for(ana).await.as_slice() {
        [ServerEvent::Ice { candidate, from }] => {
            assert_eq!(candidate["candidate"], "candidate:0 1 UDP 1 10.0.0.1 9 typ host");
            assert!(from.is_none());
        }
        other => panic!("expected one signal:ice, got {other:?}"),
    }
}
