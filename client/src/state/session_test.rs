use super::*;

#[test]
fn session_state_defaults_to_disconnected_and_no_room() {
    let state = SessionState::default();
    assert!(state.username.is_empty());
    assert!(state.room_id.is_none());
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
}

#[test]
fn connection_status_labels_are_distinct() {
    let labels = [
        ConnectionStatus::Disconnected.label(),
        ConnectionStatus::Connecting.label(),
        ConnectionStatus::Connected.label(),
    ];
    assert_eq!(labels.len(), 3);
    assert_ne!(labels[0], labels[1]);
    assert_ne!(labels[1], labels[2]);
    assert_ne!(labels[0], labels[2]);
}
