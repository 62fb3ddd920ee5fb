//! Pointer event mapping helpers for the whiteboard canvas.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

#[cfg(feature = "hydrate")]
use crate::state::strokes::Point;

/// Whether the primary button is in a `buttons` bitmask (pointer-move events
/// report held buttons there, not in `button`).
#[must_use]
pub fn primary_button_held(buttons: u16) -> bool {
    buttons & 1 == 1
}

/// Whether a `button` value from a down/up event is the primary button.
#[must_use]
pub fn is_primary_button(button: i16) -> bool {
    button == 0
}

/// Canvas-relative coordinates of a pointer event.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}
