use super::*;

fn event(payload: Payload, from: Option<&str>) -> Event {
    Event {
        id: "m1".to_owned(),
        ts: 42,
        room_id: "room-1".to_owned(),
        from: from.map(str::to_owned),
        payload,
    }
}

#[test]
fn parse_chat_event_maps_fields() {
    let ev = event(
        Payload::Chat {
            message: "hello".to_owned(),
        },
        Some("ada"),
    );
    let msg = parse_chat_event(&ev).expect("chat event should parse");
    assert_eq!(msg.id, "m1");
    assert_eq!(msg.username, "ada");
    assert_eq!(msg.message, "hello");
    assert_eq!(msg.ts, 42);
}

#[test]
fn parse_chat_event_defaults_missing_sender() {
    let ev = event(
        Payload::Chat {
            message: "hello".to_owned(),
        },
        None,
    );
    let msg = parse_chat_event(&ev).expect("chat event should parse");
    assert_eq!(msg.username, "anonymous");
}

#[test]
fn parse_chat_event_ignores_drawing_payloads() {
    let ev = event(
        Payload::DrawingEnd {
            stroke_id: "s1".to_owned(),
        },
        Some("ada"),
    );
    assert!(parse_chat_event(&ev).is_none());
}
