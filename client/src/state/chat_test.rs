use super::*;

fn msg(id: &str, username: &str, text: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        username: username.to_owned(),
        message: text.to_owned(),
        ts: 42,
    }
}

// =============================================================
// ChatState
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn append_remote_preserves_arrival_order() {
    let mut state = ChatState::default();
    assert!(state.append_remote(msg("m1", "ann", "one")));
    assert!(state.append_remote(msg("m2", "bob", "two")));
    assert!(state.append_remote(msg("m3", "ann", "three")));

    let texts: Vec<&str> = state.messages.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, ["one", "two", "three"]);
}

#[test]
fn append_remote_deduplicates_own_echo_by_id() {
    let mut state = ChatState::default();
    state.append_local(msg("m1", "ann", "hello"));

    assert!(!state.append_remote(msg("m1", "ann", "hello")));
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn append_remote_accepts_other_senders_after_local_send() {
    let mut state = ChatState::default();
    state.append_local(msg("m1", "ann", "hello"));

    assert!(state.append_remote(msg("m2", "bob", "hey")));
    assert_eq!(state.messages.len(), 2);
}

// =============================================================
// prepare_outgoing
// =============================================================

#[test]
fn prepare_outgoing_trims_text() {
    let out = prepare_outgoing("  hello there \n", "ann").expect("should accept");
    assert_eq!(out.message, "hello there");
    assert_eq!(out.username, "ann");
}

#[test]
fn prepare_outgoing_rejects_empty_input() {
    assert!(prepare_outgoing("", "ann").is_none());
}

#[test]
fn prepare_outgoing_rejects_whitespace_only_input() {
    assert!(prepare_outgoing("   \t\n", "ann").is_none());
}

#[test]
fn prepare_outgoing_generates_unique_ids() {
    let a = prepare_outgoing("one", "ann").expect("accept");
    let b = prepare_outgoing("one", "ann").expect("accept");
    assert_ne!(a.id, b.id);
}

// =============================================================
// ChatMessage::to_event
// =============================================================

#[test]
fn to_event_carries_id_room_sender_and_text() {
    let message = msg("m1", "ann", "hello");
    let event = message.to_event("room-1");

    assert_eq!(event.id, "m1");
    assert_eq!(event.room_id, "room-1");
    assert_eq!(event.from.as_deref(), Some("ann"));
    assert_eq!(
        event.payload,
        Payload::Chat { message: "hello".to_owned() }
    );
}
