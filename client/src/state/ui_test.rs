use super::*;

#[test]
fn ui_state_default_has_no_notices() {
    let state = UiState::default();
    assert!(state.notices.is_empty());
}

#[test]
fn push_error_appends_one_notice_with_error_level() {
    let mut state = UiState::default();
    state.push_error("Connection not established.");

    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].level, NoticeLevel::Error);
    assert_eq!(state.notices[0].text, "Connection not established.");
}

#[test]
fn notice_ids_are_unique_across_pushes() {
    let mut state = UiState::default();
    let a = state.push_error("one");
    let b = state.push_info("two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_named_notice() {
    let mut state = UiState::default();
    let a = state.push_error("one");
    let b = state.push_info("two");

    state.dismiss(a);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, b);

    state.dismiss(999);
    assert_eq!(state.notices.len(), 1);
}
