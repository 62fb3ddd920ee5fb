use super::*;
use events::{Event, Payload};

fn chat_event(room_id: &str) -> Event {
    Event {
        id: "m1".to_owned(),
        ts: 1,
        room_id: room_id.to_owned(),
        from: Some("ada".to_owned()),
        payload: Payload::Chat {
            message: "hi".to_owned(),
        },
    }
}

#[test]
fn matching_room_accepted() {
    assert!(event_is_for_room(&chat_event("room-1"), "room-1"));
}

#[test]
fn other_room_filtered() {
    assert!(!event_is_for_room(&chat_event("room-2"), "room-1"));
}

#[test]
fn untagged_event_accepted() {
    assert!(event_is_for_room(&chat_event(""), "room-1"));
}

#[test]
fn dropping_guard_cancels_socket_task() {
    let (cancel_tx, mut cancel_rx) = futures::channel::oneshot::channel::<()>();
    let guard = SocketGuard {
        cancel: Some(cancel_tx),
    };

    assert_eq!(cancel_rx.try_recv(), Ok(None));
    drop(guard);
    assert_eq!(cancel_rx.try_recv(), Ok(Some(())));
}

#[test]
fn room_socket_detects_room_change() {
    let (cancel_tx, _cancel_rx) = futures::channel::oneshot::channel::<()>();
    let socket = RoomSocket::new(
        "room-1".to_owned(),
        SocketGuard {
            cancel: Some(cancel_tx),
        },
    );

    assert!(socket.serves("room-1"));
    assert!(!socket.serves("room-2"));
}

#[test]
fn backoff_doubles_after_quick_failures() {
    assert_eq!(next_backoff_ms(1000, 0), 2000);
    assert_eq!(next_backoff_ms(2000, 150), 4000);
}

#[test]
fn backoff_caps_at_maximum() {
    assert_eq!(next_backoff_ms(8000, 0), 10_000);
    assert_eq!(next_backoff_ms(10_000, 0), 10_000);
}

#[test]
fn backoff_resets_after_stable_connection() {
    assert_eq!(next_backoff_ms(10_000, 60_000), 1000);
    assert_eq!(next_backoff_ms(4000, 5000), 1000);
}
