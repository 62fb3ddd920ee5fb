//! Drawing event handlers extracted from `socket`.

#[cfg(test)]
#[path = "socket_draw_test.rs"]
mod socket_draw_test;

use std::collections::HashSet;

use events::Payload;

use crate::state::strokes::{Point, Segment, StrokeTracker};

/// Stroke id carried by a drawing payload, if any.
///
/// Used to recognize the broadcast echo of strokes this client drew itself.
#[must_use]
pub fn payload_stroke_id(payload: &Payload) -> Option<&str> {
    match payload {
        Payload::DrawingStart { stroke_id, .. }
        | Payload::Drawing { stroke_id, .. }
        | Payload::DrawingEnd { stroke_id } => Some(stroke_id),
        Payload::Chat { .. } => None,
    }
}

/// Whether an inbound drawing payload is the broadcast echo of a stroke this
/// client drew itself.
///
/// The end echo retires its id from the set, so strokes do not accumulate
/// there over the life of the page.
pub fn is_own_echo(own_strokes: &mut HashSet<String>, payload: &Payload) -> bool {
    let Some(stroke_id) = payload_stroke_id(payload) else {
        return false;
    };
    if !own_strokes.contains(stroke_id) {
        return false;
    }
    if matches!(payload, Payload::DrawingEnd { .. }) {
        own_strokes.remove(stroke_id);
    }
    true
}

/// Apply a drawing payload to a stroke tracker.
///
/// Returns the segment to render when the payload extends a known stroke.
/// Start and end payloads only mutate the tracker; chat payloads and points
/// for unknown strokes yield nothing.
pub fn apply_drawing_payload(tracker: &mut StrokeTracker, payload: &Payload) -> Option<Segment> {
    match payload {
        Payload::DrawingStart { stroke_id, x, y } => {
            tracker.begin(stroke_id, Point::new(*x, *y));
            None
        }
        Payload::Drawing { stroke_id, x, y } => tracker.advance(stroke_id, Point::new(*x, *y)),
        Payload::DrawingEnd { stroke_id } => {
            tracker.end(stroke_id);
            None
        }
        Payload::Chat { .. } => None,
    }
}
