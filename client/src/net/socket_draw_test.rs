use super::*;

fn start(stroke_id: &str, x: f64, y: f64) -> Payload {
    Payload::DrawingStart {
        stroke_id: stroke_id.to_owned(),
        x,
        y,
    }
}

fn point(stroke_id: &str, x: f64, y: f64) -> Payload {
    Payload::Drawing {
        stroke_id: stroke_id.to_owned(),
        x,
        y,
    }
}

fn end(stroke_id: &str) -> Payload {
    Payload::DrawingEnd {
        stroke_id: stroke_id.to_owned(),
    }
}

#[test]
fn start_then_point_yields_segment() {
    let mut tracker = StrokeTracker::default();
    assert!(apply_drawing_payload(&mut tracker, &start("s1", 10.0, 20.0)).is_none());

    let seg = apply_drawing_payload(&mut tracker, &point("s1", 15.0, 25.0))
        .expect("point on open stroke should yield a segment");
    assert_eq!(seg.from, Point::new(10.0, 20.0));
    assert_eq!(seg.to, Point::new(15.0, 25.0));
}

#[test]
fn point_without_start_is_ignored() {
    let mut tracker = StrokeTracker::default();
    assert!(apply_drawing_payload(&mut tracker, &point("orphan", 1.0, 2.0)).is_none());
}

#[test]
fn end_closes_the_stroke() {
    let mut tracker = StrokeTracker::default();
    apply_drawing_payload(&mut tracker, &start("s1", 0.0, 0.0));
    apply_drawing_payload(&mut tracker, &end("s1"));
    assert_eq!(tracker.active_count(), 0);
    assert!(apply_drawing_payload(&mut tracker, &point("s1", 5.0, 5.0)).is_none());
}

#[test]
fn interleaved_strokes_stay_separate() {
    let mut tracker = StrokeTracker::default();
    apply_drawing_payload(&mut tracker, &start("a", 0.0, 0.0));
    apply_drawing_payload(&mut tracker, &start("b", 100.0, 100.0));

    let seg_a = apply_drawing_payload(&mut tracker, &point("a", 1.0, 1.0))
        .expect("stroke a should advance");
    let seg_b = apply_drawing_payload(&mut tracker, &point("b", 101.0, 101.0))
        .expect("stroke b should advance");

    assert_eq!(seg_a.from, Point::new(0.0, 0.0));
    assert_eq!(seg_b.from, Point::new(100.0, 100.0));
}

#[test]
fn payload_stroke_id_covers_drawing_kinds() {
    assert_eq!(payload_stroke_id(&start("s1", 0.0, 0.0)), Some("s1"));
    assert_eq!(payload_stroke_id(&point("s1", 0.0, 0.0)), Some("s1"));
    assert_eq!(payload_stroke_id(&end("s1")), Some("s1"));
    assert_eq!(
        payload_stroke_id(&Payload::Chat {
            message: "hi".to_owned(),
        }),
        None
    );
}

#[test]
fn own_echo_skipped_and_retired_on_end() {
    let mut own = HashSet::from(["s1".to_owned()]);

    assert!(is_own_echo(&mut own, &start("s1", 0.0, 0.0)));
    assert!(is_own_echo(&mut own, &point("s1", 1.0, 1.0)));
    assert!(is_own_echo(&mut own, &end("s1")));
    assert!(own.is_empty());

    // Stragglers after the end echo fall through to the tracker.
    assert!(!is_own_echo(&mut own, &point("s1", 2.0, 2.0)));
}

#[test]
fn remote_stroke_is_not_own_echo() {
    let mut own = HashSet::from(["mine".to_owned()]);
    assert!(!is_own_echo(&mut own, &start("theirs", 0.0, 0.0)));
    assert!(!is_own_echo(
        &mut own,
        &Payload::Chat {
            message: "hi".to_owned(),
        },
    ));
    assert_eq!(own.len(), 1);
}

#[test]
fn chat_payload_is_ignored() {
    let mut tracker = StrokeTracker::default();
    let none = apply_drawing_payload(
        &mut tracker,
        &Payload::Chat {
            message: "hi".to_owned(),
        },
    );
    assert!(none.is_none());
    assert_eq!(tracker.active_count(), 0);
}
