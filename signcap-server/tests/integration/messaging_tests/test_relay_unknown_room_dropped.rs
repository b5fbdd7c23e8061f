use signcap_core::{ConnectionId, ServerEvent};

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::{chat, join, offer};

#[tokio::test]
async fn test_signal_into_unknown_room_goes_nowhere() {
    init_tracing();

    let (coordinator, registry, sink) = create_test_coordinator();
    let ana = ConnectionId::new();

    coordinator.handle_event(ana, join("r1", "Ana", "")).await;
    sink.clear().await;

    coordinator
        .handle_event(ana, offer("elsewhere", "v=0", None))
        .await;

    // Unaddressable room: dropped silently, no error back to the sender.
    assert!(sink.all().await.is_empty());
    assert_eq!(registry.room_count(), 1);
}

#[tokio::test]
async fn test_non_member_can_broadcast_into_room() {
    init_tracing();

    let (coordinator, _registry, sink) = create_test_coordinator();
    let ana = ConnectionId::new();
    let stranger = ConnectionId::new();

    coordinator.handle_event(ana, join("r1", "Ana", "")).await;
    sink.clear().await;

    // Membership is not verified before relaying; best-effort by design.
    coordinator
        .handle_event(stranger, chat("r1", "hello", "Stranger"))
        .await;

    match sink.events_for(ana).await.as_slice() {
        [ServerEvent::Chat { text, sender, .. }] => {
            assert_eq!(text, "hello");
            assert_eq!(sender, "Stranger");
        }
        other => panic!("expected one chat:message, got {other:?}"),
    }
}
