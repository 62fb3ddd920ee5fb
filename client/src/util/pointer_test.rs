use super::*;

#[test]
fn held_when_primary_bit_set() {
    assert!(primary_button_held(1));
    assert!(primary_button_held(3));
    assert!(primary_button_held(5));
}

#[test]
fn not_held_without_primary_bit() {
    assert!(!primary_button_held(0));
    assert!(!primary_button_held(2));
    assert!(!primary_button_held(4));
}

#[test]
fn primary_button_is_zero() {
    assert!(is_primary_button(0));
    assert!(!is_primary_button(1));
    assert!(!is_primary_button(2));
}
