//! Stroke bookkeeping for the shared whiteboard.
//!
//! Each in-progress stroke is tracked by its client-generated id with the
//! last coordinate seen, so successive point events become connected line
//! segments instead of degenerate dots, and interleaved strokes from
//! different users never cross-connect.

#[cfg(test)]
#[path = "strokes_test.rs"]
mod strokes_test;

use std::collections::HashMap;

/// A 2D canvas point in CSS pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A drawable line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Ceiling on concurrently open strokes. A peer whose end events never
/// arrive would otherwise pin tracker entries for the life of the page.
const MAX_OPEN_STROKES: usize = 64;

/// Tracks open strokes by id.
#[derive(Clone, Debug, Default)]
pub struct StrokeTracker {
    active: HashMap<String, Point>,
}

impl StrokeTracker {
    /// Open a stroke at `at`. A repeated start for the same id moves the
    /// stroke origin rather than erroring. At the stroke ceiling an arbitrary
    /// open stroke is evicted; anything that old is abandoned anyway.
    pub fn begin(&mut self, stroke_id: &str, at: Point) {
        if self.active.len() >= MAX_OPEN_STROKES && !self.active.contains_key(stroke_id) {
            if let Some(evict) = self.active.keys().next().cloned() {
                self.active.remove(&evict);
            }
        }
        self.active.insert(stroke_id.to_owned(), at);
    }

    /// Advance a stroke to `to`, yielding the segment from its previous
    /// point. Points for unknown stroke ids are ignored (events can arrive
    /// after a stroke ended or before its start was seen).
    pub fn advance(&mut self, stroke_id: &str, to: Point) -> Option<Segment> {
        let last = self.active.get_mut(stroke_id)?;
        let segment = Segment { from: *last, to };
        *last = to;
        Some(segment)
    }

    /// Close a stroke. Returns whether the stroke was open; later points for
    /// this id no longer connect to anything.
    pub fn end(&mut self, stroke_id: &str) -> bool {
        self.active.remove(stroke_id).is_some()
    }

    /// Number of strokes currently open.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
